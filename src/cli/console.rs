/// Renders a session for a human, or as JSON lines for a harness.
pub struct Console<W> {
    out: W,
    json: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Play `opponent` against `source` until the source ends, rendering as we go.
    pub fn session<O>(&mut self, opponent: &mut O, source: &mut dyn Source, mode: Mode) -> Result<Tally>
    where
        O: Opponent,
    {
        self.banner(mode)?;
        log::info!("starting {:?} session", mode);
        for round in opponent.rounds(source) {
            self.round(&round)?;
        }
        let tally = opponent.tally();
        log::info!("session over: {}", tally);
        self.summary(&tally, mode)?;
        Ok(tally)
    }

    fn banner(&mut self, mode: Mode) -> Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "{}", BANNER)?;
        if mode == Mode::Reader {
            writeln!(self.out, "{}", BANNER_READER)?;
        }
        Ok(())
    }

    pub fn round(&mut self, round: &Round) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, round).context("serialize round")?;
            writeln!(self.out)?;
            return Ok(());
        }
        let line = format!("You pressed {}, I guessed {}", round.pick, round.prediction);
        match round.machine_won() {
            true => writeln!(self.out, "{}", line.red())?,
            false => writeln!(self.out, "{}", line.green())?,
        }
        Ok(())
    }

    pub fn summary(&mut self, tally: &Tally, mode: Mode) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, &serde_json::json!({ "tally": tally }))
                .context("serialize tally")?;
            writeln!(self.out)?;
            return Ok(());
        }
        writeln!(self.out, "{}", format!("You win {}", tally.losses).bold())?;
        if mode == Mode::Reader {
            writeln!(self.out, "Machine guessed {} times", tally.guesses)?;
        }
        writeln!(self.out, "{}", format!("Machine won {}", tally.wins).bold())?;
        Ok(())
    }
}

use super::args::Mode;
use crate::BANNER;
use crate::BANNER_READER;
use crate::play::Opponent;
use crate::play::Round;
use crate::play::Tally;
use crate::players::Source;
use anyhow::Context;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
