//! The learned model: a bounded table of recent transitions per context,
//! and the consensus rule that turns it into predictions.
pub mod decision;
pub mod memory;
pub mod predictor;
pub mod table;

pub use decision::Decision;
pub use memory::Memory;
pub use predictor::Guess;
pub use predictor::Predictor;
pub use table::Table;
