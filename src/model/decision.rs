/// What the recent evidence says the human will do next.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    RepeatLikely,
    SwitchLikely,
    Unpredictable,
}

/// Consensus rule: both remembered transitions must agree, and be known.
/// A single disagreement or a missing observation is unpredictable.
impl From<Memory> for Decision {
    fn from(memory: Memory) -> Self {
        match (memory.older(), memory.newer()) {
            (Transition::Repeated, Transition::Repeated) => Decision::RepeatLikely,
            (Transition::Switched, Transition::Switched) => Decision::SwitchLikely,
            (Transition::Unknown, _)
            | (_, Transition::Unknown)
            | (Transition::Repeated, Transition::Switched)
            | (Transition::Switched, Transition::Repeated) => Decision::Unpredictable,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Decision::RepeatLikely => write!(f, "repeat"),
            Decision::SwitchLikely => write!(f, "switch"),
            Decision::Unpredictable => write!(f, "shrug"),
        }
    }
}

use super::memory::Memory;
use crate::game::Transition;
use serde::Deserialize;
use serde::Serialize;
