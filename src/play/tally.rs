/// Running score, from the machine's side.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds where the prediction matched the pick.
    pub wins: Count,
    /// Rounds where it did not (the human's wins).
    pub losses: Count,
    /// Predictions that fell back to the coin.
    pub guesses: Count,
}

impl Tally {
    pub fn rounds(&self) -> Count {
        self.wins + self.losses
    }
    /// Count one scored round, and whether its follow-up prediction came from the coin.
    pub fn record(&mut self, won: bool, guessing: bool) {
        match won {
            true => self.wins += 1,
            false => self.losses += 1,
        }
        if guessing {
            self.guesses += 1;
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "machine {} - {} human ({} guessed)",
            self.wins, self.losses, self.guesses
        )
    }
}

use crate::Count;
use serde::Deserialize;
use serde::Serialize;
