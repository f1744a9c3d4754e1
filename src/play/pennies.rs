/// Baseline opponent that never learns: every prediction is a coin flip.
#[derive(Debug, Clone)]
pub struct Pennies<C> {
    prediction: Pick,
    phase: Phase,
    tally: Tally,
    coin: C,
}

impl<C: Coin> Pennies<C> {
    pub fn new(mut coin: C) -> Self {
        Self {
            prediction: coin.flip(),
            phase: Phase::AwaitingFirstMove,
            tally: Tally::default(),
            coin,
        }
    }
}

impl<C: Coin> Opponent for Pennies<C> {
    fn prediction(&self) -> Pick {
        self.prediction
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn tally(&self) -> Tally {
        self.tally
    }
    fn end(&mut self) {
        self.phase = Phase::Ended;
    }
    fn observe(&mut self, pick: Pick) -> Option<Round> {
        if self.phase.is_over() {
            return None;
        }
        let outcome = Outcome::score(self.prediction, pick);
        self.tally.record(outcome == Outcome::MachineWon, true);
        let round = Round {
            index: self.tally.rounds(),
            prediction: self.prediction,
            pick,
            outcome,
            guessed: true,
            next_guessing: true,
            tally: self.tally,
        };
        log::debug!("[pennies] {}", round);
        self.prediction = self.coin.flip();
        self.phase = Phase::AwaitingMove;
        Some(round)
    }
}

use super::opponent::Opponent;
use super::phase::Phase;
use super::round::Round;
use super::tally::Tally;
use crate::game::Outcome;
use crate::game::Pick;
use crate::players::Coin;
