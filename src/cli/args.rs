use crate::players::Flip;
use clap::Parser;
use clap::ValueEnum;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play matching pennies against a mind reader", long_about = None)]
pub struct Args {
    /// Which opponent to play against.
    #[arg(long, value_enum, default_value_t = Mode::Reader)]
    pub mode: Mode,
    /// Where picks come from.
    #[arg(long, value_enum, default_value_t = Input::Prompt)]
    pub input: Input,
    /// Seed for the machine's coin. Falls back to MINDREADER_SEED, then OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Emit one JSON object per round instead of text.
    #[arg(long)]
    pub json: bool,
    /// Raise terminal log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Learns whether you repeat or switch after winning or losing.
    Reader,
    /// Flips a coin every round.
    Pennies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Input {
    /// Interactive prompt that re-asks on bad input.
    Prompt,
    /// One pick per stdin line; anything else ends the session.
    Lines,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    pub fn coin(&self) -> Flip {
        match self.seed.or_else(crate::seed) {
            Some(seed) => {
                log::info!("seeding coin with {}", seed);
                Flip::seeded(seed)
            }
            None => Flip::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["mindreader"]).unwrap();
        assert_eq!(args.mode, Mode::Reader);
        assert_eq!(args.input, Input::Prompt);
        assert_eq!(args.seed, None);
        assert!(!args.json);
        assert_eq!(args.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "mindreader", "--mode", "pennies", "--input", "lines", "--seed", "7", "--json", "-vv",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Pennies);
        assert_eq!(args.input, Input::Lines);
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
        assert_eq!(args.level(), log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["mindreader", "--mode", "psychic"]).is_err());
    }
}
