/// Where a session stands between suspension points.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Holding a coin-flip prediction; no pick has been seen yet.
    #[default]
    AwaitingFirstMove,
    /// Holding a prediction learned from earlier rounds.
    AwaitingMove,
    /// The source stopped supplying picks. Terminal.
    Ended,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Ended)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

use serde::Deserialize;
use serde::Serialize;
