//! Collaborators feeding a session: where picks come from ([`Source`])
//! and where the machine's fallback randomness comes from ([`Coin`]).
mod coin;
#[cfg(feature = "cli")]
mod human;
mod lines;
mod script;

pub use coin::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use lines::*;
pub use script::*;

/// Supplies the human's next pick, blocking until one is available.
///
/// `None` ends the session. Malformed input is the source's own concern:
/// it either re-prompts or ends the session, and never hands the core an
/// invalid pick.
pub trait Source {
    fn pick(&mut self) -> Option<Pick>;
}

/// Supplies uniformly random, independent bits for fallback predictions.
pub trait Coin {
    fn flip(&mut self) -> Pick;
}

use crate::game::Pick;
