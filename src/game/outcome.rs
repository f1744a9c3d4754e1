/// Whether the machine's prediction matched the human's pick.
///
/// `MachineWon` means the prediction was correct, `MachineLost` means it was
/// not. `Unset` only appears in contexts formed before the first completed round.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    MachineLost,
    MachineWon,
    #[default]
    Unset,
}

impl Outcome {
    /// The two outcomes a completed round can have.
    pub const fn settled() -> [Outcome; 2] {
        [Outcome::MachineLost, Outcome::MachineWon]
    }
    /// Score a round: the machine wins when it predicted the pick.
    pub fn score(prediction: Pick, pick: Pick) -> Outcome {
        match prediction == pick {
            true => Outcome::MachineWon,
            false => Outcome::MachineLost,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::MachineLost => write!(f, "L"),
            Outcome::MachineWon => write!(f, "W"),
            Outcome::Unset => write!(f, "?"),
        }
    }
}

use super::pick::Pick;
use serde::Deserialize;
use serde::Serialize;
