//! Vocabulary of a matching pennies session: picks, outcomes,
//! transitions, and the context key they combine into.
pub mod context;
pub mod outcome;
pub mod pick;
pub mod transition;

pub use context::Context;
pub use outcome::Outcome;
pub use pick::Pick;
pub use transition::Transition;
