//! Command line surface: argument parsing and console rendering.
mod args;
mod console;

pub use args::*;
pub use console::*;
