/// How the human's pick relates to their previous one.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Transition {
    Repeated,
    Switched,
    #[default]
    Unknown,
}

impl Transition {
    /// The two transitions observable once a previous pick exists.
    pub const fn known() -> [Transition; 2] {
        [Transition::Repeated, Transition::Switched]
    }
    /// Compare a pick against the previous one, if there was one.
    pub fn between(previous: Option<Pick>, pick: Pick) -> Transition {
        match previous {
            None => Transition::Unknown,
            Some(p) if p == pick => Transition::Repeated,
            Some(_) => Transition::Switched,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Transition::Repeated => write!(f, "="),
            Transition::Switched => write!(f, "~"),
            Transition::Unknown => write!(f, "?"),
        }
    }
}

use super::pick::Pick;
use serde::Deserialize;
use serde::Serialize;
