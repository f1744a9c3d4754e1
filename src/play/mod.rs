//! Round drivers. Each [`Opponent`] holds one live prediction, waits for
//! the human's pick, scores it, learns from it, and reports a [`Round`].
mod opponent;
mod pennies;
mod phase;
mod reader;
mod round;
mod tally;

pub use opponent::*;
pub use pennies::*;
pub use phase::*;
pub use reader::*;
pub use round::*;
pub use tally::*;
