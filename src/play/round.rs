/// Report of one completed round, read by whoever renders the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub index: Count,
    /// What the machine predicted before seeing the pick.
    pub prediction: Pick,
    /// What the human picked.
    pub pick: Pick,
    pub outcome: Outcome,
    /// Whether this round's prediction came from the coin.
    pub guessed: bool,
    /// Whether the prediction held for the next round came from the coin.
    pub next_guessing: bool,
    /// Score after this round.
    pub tally: Tally,
}

impl Round {
    pub fn machine_won(&self) -> bool {
        self.outcome == Outcome::MachineWon
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} predicted {} picked {} {}",
            self.index, self.prediction, self.pick, self.outcome
        )
    }
}

use super::tally::Tally;
use crate::Count;
use crate::game::Outcome;
use crate::game::Pick;
use serde::Deserialize;
use serde::Serialize;
