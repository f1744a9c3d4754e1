/// A machine player in the matching game.
///
/// The provided [`Opponent::play`] runs one full round: it emits the held
/// prediction, suspends on the [`Source`] for the human's pick, and then
/// hands the pick to [`Opponent::observe`]. If the source ends the session,
/// the opponent moves to [`Phase::Ended`] and nothing else changes, so the
/// table and tally stay as they were after the last completed round.
pub trait Opponent {
    /// Prediction for the upcoming pick.
    fn prediction(&self) -> Pick;
    fn phase(&self) -> Phase;
    fn tally(&self) -> Tally;
    /// Score and learn from a pick. `None` once the session has ended.
    fn observe(&mut self, pick: Pick) -> Option<Round>;
    /// Stop the session. No further rounds are accepted.
    fn end(&mut self);

    fn play(&mut self, source: &mut dyn Source) -> Option<Round> {
        if self.phase().is_over() {
            return None;
        }
        log::trace!("[opponent] holding {}", self.prediction());
        match source.pick() {
            Some(pick) => self.observe(pick),
            None => {
                log::debug!("[opponent] session ended after {} rounds", self.tally().rounds());
                self.end();
                None
            }
        }
    }

    /// Rounds as an iterator, one source pick per `next`.
    fn rounds<'a>(&'a mut self, source: &'a mut dyn Source) -> Rounds<'a, Self>
    where
        Self: Sized,
    {
        Rounds {
            opponent: self,
            source,
        }
    }
}

/// Drives an [`Opponent`] against a [`Source`] until the source ends.
pub struct Rounds<'a, O> {
    opponent: &'a mut O,
    source: &'a mut dyn Source,
}

impl<'a, O: Opponent> Iterator for Rounds<'a, O> {
    type Item = Round;
    fn next(&mut self) -> Option<Self::Item> {
        self.opponent.play(&mut *self.source)
    }
}

use super::phase::Phase;
use super::round::Round;
use super::tally::Tally;
use crate::game::Pick;
use crate::players::Source;
