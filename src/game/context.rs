/// The behavioral situation a pick is made in: the outcome two rounds ago,
/// the human's most recent transition, and the outcome of the last round.
///
/// Only the eight combinations of settled outcomes and known transitions
/// carry learned evidence. Every other key (one still containing `Unset` or
/// `Unknown`, which only happens during the first two rounds) collapses onto
/// [`Context::SENTINEL`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Context {
    prev: Outcome,
    last: Transition,
    curr: Outcome,
}

impl Context {
    /// Shared key for every incomplete context. Also the key a session starts from.
    pub const SENTINEL: Context = Context {
        prev: Outcome::Unset,
        last: Transition::Unknown,
        curr: Outcome::Unset,
    };

    pub const fn new(prev: Outcome, last: Transition, curr: Outcome) -> Self {
        Self { prev, last, curr }
    }
    pub fn prev(&self) -> Outcome {
        self.prev
    }
    pub fn last(&self) -> Transition {
        self.last
    }
    pub fn curr(&self) -> Outcome {
        self.curr
    }

    /// Roll the window forward by one round. The current outcome becomes
    /// the previous one; the fresh transition and outcome take their places.
    pub fn shift(&self, transition: Transition, outcome: Outcome) -> Self {
        Self::new(self.curr, transition, outcome)
    }

    /// All eight contexts that are pre-seeded into a fresh table.
    pub fn seeded() -> [Context; 8] {
        let mut keys = [Self::SENTINEL; 8];
        let mut i = 0;
        for prev in Outcome::settled() {
            for last in Transition::known() {
                for curr in Outcome::settled() {
                    keys[i] = Self::new(prev, last, curr);
                    i += 1;
                }
            }
        }
        keys
    }

    /// Dense index in `0..8` for complete contexts.
    pub fn index(&self) -> Option<usize> {
        let prev = match self.prev {
            Outcome::MachineLost => 0,
            Outcome::MachineWon => 1,
            Outcome::Unset => return None,
        };
        let last = match self.last {
            Transition::Repeated => 0,
            Transition::Switched => 1,
            Transition::Unknown => return None,
        };
        let curr = match self.curr {
            Outcome::MachineLost => 0,
            Outcome::MachineWon => 1,
            Outcome::Unset => return None,
        };
        Some(prev << 2 | last << 1 | curr)
    }
    pub fn is_complete(&self) -> bool {
        self.index().is_some()
    }
    /// The key this context is stored under.
    pub fn canonical(&self) -> Self {
        match self.is_complete() {
            true => *self,
            false => Self::SENTINEL,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prev, self.last, self.curr)
    }
}

use super::outcome::Outcome;
use super::transition::Transition;
use serde::Deserialize;
use serde::Serialize;
