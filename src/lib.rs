//! An adaptive opponent for the matching pennies game.
//!
//! The human picks 0 or 1 each round and the machine tries to predict the
//! pick before it is revealed. The [`play::Reader`] learns whether the human
//! tends to repeat or switch after winning or losing, keeping only the last
//! two observations per situation in a bounded [`model::Table`].
#![allow(dead_code)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod game;
pub mod model;
pub mod play;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round counters and win/loss tallies.
pub type Count = u32;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Directory receiving timestamped session logs.
pub const LOG_DIR: &str = "logs";
/// Environment variable consulted for a coin seed when none is passed on the command line.
pub const SEED_VAR: &str = "MINDREADER_SEED";
/// Upper bound on pattern table entries (8 complete contexts + 1 sentinel).
pub const TABLE_CAPACITY: usize = 9;

/// Session banner shown before the first prompt.
pub const BANNER: &str = "Select 0 or 1 at random and press enter.\nIf the computer predicts your guess it wins.";
/// Extra banner line for the learning opponent.
pub const BANNER_READER: &str = "and it can now read your mind.";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOG_DIR).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIR, time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Coin seed from the environment, if set and parseable.
pub fn seed() -> Option<u64> {
    match std::env::var(SEED_VAR) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring unparseable {}={}", SEED_VAR, value);
                None
            }
        },
        Err(_) => None,
    }
}
