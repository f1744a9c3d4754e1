/// A concrete prediction, and whether it came from the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub pick: Pick,
    pub guessing: bool,
}

/// Turns table evidence into a 0/1 prediction.
pub struct Predictor;

impl Predictor {
    pub fn decide(memory: Memory) -> Decision {
        Decision::from(memory)
    }
    /// Commit to a pick. Consumes one coin flip only when unpredictable.
    pub fn guess<C>(decision: Decision, previous: Pick, coin: &mut C) -> Guess
    where
        C: Coin + ?Sized,
    {
        match decision {
            Decision::RepeatLikely => Guess {
                pick: previous,
                guessing: false,
            },
            Decision::SwitchLikely => Guess {
                pick: previous.flip(),
                guessing: false,
            },
            Decision::Unpredictable => Guess {
                pick: coin.flip(),
                guessing: true,
            },
        }
    }
    /// Lookup, decide, and guess in one step.
    pub fn predict<C>(table: &Table, context: &Context, previous: Pick, coin: &mut C) -> Guess
    where
        C: Coin + ?Sized,
    {
        let memory = table.lookup(context);
        let decision = Self::decide(memory);
        log::trace!("[predictor] {} {} -> {}", context, memory, decision);
        Self::guess(decision, previous, coin)
    }
}

use super::decision::Decision;
use super::memory::Memory;
use super::table::Table;
use crate::game::Context;
use crate::game::Pick;
use crate::players::Coin;
use serde::Deserialize;
use serde::Serialize;
