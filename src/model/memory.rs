/// The two most recently observed transitions under one context.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    older: Transition,
    newer: Transition,
}

impl Memory {
    pub const fn new(older: Transition, newer: Transition) -> Self {
        Self { older, newer }
    }
    /// No evidence either way.
    pub const fn empty() -> Self {
        Self::new(Transition::Unknown, Transition::Unknown)
    }
    pub fn older(&self) -> Transition {
        self.older
    }
    pub fn newer(&self) -> Transition {
        self.newer
    }
    /// Forget the older observation and remember `transition` as the newer one.
    pub fn shift(&mut self, transition: Transition) {
        self.older = self.newer;
        self.newer = transition;
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}{})", self.older, self.newer)
    }
}

use crate::game::Transition;
use serde::Deserialize;
use serde::Serialize;
