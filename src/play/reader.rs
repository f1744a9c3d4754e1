/// The learning opponent.
///
/// Owns its own [`Table`], built fresh for every session, plus the one live
/// [`Context`], the held prediction, and the human's previous pick. Each
/// observed pick is recorded under the context it was made in, strictly
/// before the next prediction is read from the table.
#[derive(Debug, Clone)]
pub struct Reader<C> {
    table: Table,
    context: Context,
    prediction: Pick,
    guessing: bool,
    previous: Option<Pick>,
    phase: Phase,
    tally: Tally,
    coin: C,
}

impl<C: Coin> Reader<C> {
    /// Start a session. The first prediction is a coin flip, since there is no history yet.
    pub fn new(mut coin: C) -> Self {
        let prediction = coin.flip();
        Self {
            table: Table::default(),
            context: Context::SENTINEL,
            prediction,
            guessing: true,
            previous: None,
            phase: Phase::AwaitingFirstMove,
            tally: Tally::default(),
            coin,
        }
    }
}

impl<C> Reader<C> {
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn context(&self) -> Context {
        self.context
    }
    pub fn previous(&self) -> Option<Pick> {
        self.previous
    }
    /// What the table currently says about the live context.
    pub fn decision(&self) -> Decision {
        Predictor::decide(self.table.lookup(&self.context))
    }
}

impl<C: Coin> Opponent for Reader<C> {
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
        log::debug!("[reader] final table\n{}", self.table);
    }
    fn observe(&mut self, pick: Pick) -> Option<Round> {
        if self.phase.is_over() {
            return None;
        }
        let transition = Transition::between(self.previous, pick);
        let outcome = Outcome::score(self.prediction, pick);
        self.table.record(&self.context, transition);
        self.context = self.context.shift(transition, outcome);
        let guess = Predictor::predict(&self.table, &self.context, pick, &mut self.coin);
        self.tally.record(outcome == Outcome::MachineWon, guess.guessing);
        let round = Round {
            index: self.tally.rounds(),
            prediction: self.prediction,
            pick,
            outcome,
            guessed: self.guessing,
            next_guessing: guess.guessing,
            tally: self.tally,
        };
        log::debug!(
            "[reader] {} {} next {}{}",
            round,
            self.context,
            guess.pick,
            if guess.guessing { " (coin)" } else { "" }
        );
        self.prediction = guess.pick;
        self.guessing = guess.guessing;
        self.previous = Some(pick);
        self.phase = Phase::AwaitingMove;
        Some(round)
    }
}

use super::opponent::Opponent;
use super::phase::Phase;
use super::round::Round;
use super::tally::Tally;
use crate::game::Context;
use crate::game::Outcome;
use crate::game::Pick;
use crate::game::Transition;
use crate::model::Decision;
use crate::model::Predictor;
use crate::model::Table;
use crate::players::Coin;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TABLE_CAPACITY;
    use crate::model::Memory;
    use crate::players::Always;
    use crate::players::Flip;
    use crate::players::Script;

    fn zeros() -> Reader<Always> {
        Reader::new(Always(Pick::Zero))
    }
    fn script(s: &str) -> Script {
        Script::try_from(s).expect("valid script")
    }
    fn pick(n: u8) -> Pick {
        Pick::try_from(n).expect("valid pick")
    }

    #[test]
    fn first_prediction_is_coin() {
        let reader = Reader::new(Always(Pick::One));
        assert_eq!(reader.prediction(), Pick::One);
        assert_eq!(reader.phase(), Phase::AwaitingFirstMove);
        assert_eq!(reader.context(), Context::SENTINEL);
        assert_eq!(reader.previous(), None);
        assert_eq!(reader.table().len(), 8);
    }

    #[test]
    fn first_pick_moves_to_steady_state() {
        let ref mut reader = zeros();
        reader.observe(Pick::One).expect("live session");
        assert_eq!(reader.phase(), Phase::AwaitingMove);
        assert_eq!(reader.previous(), Some(Pick::One));
    }

    #[test]
    fn hand_traced_rounds() {
        let ref mut reader = zeros();
        let ref mut source = script("00110");
        let rounds = reader.rounds(source).collect::<Vec<_>>();
        let pairs = rounds
            .iter()
            .map(|r| (u8::from(r.prediction), u8::from(r.pick)))
            .collect::<Vec<_>>();
        let scores = rounds
            .iter()
            .map(|r| (r.tally.wins, r.tally.losses))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 0), (0, 0), (0, 1), (0, 1), (0, 0)]);
        assert_eq!(scores, vec![(1, 0), (2, 0), (2, 1), (2, 2), (3, 2)]);
        assert!(rounds.iter().all(|r| r.guessed && r.next_guessing));
        assert_eq!(reader.tally(), Tally { wins: 3, losses: 2, guesses: 5 });
        assert_eq!(reader.phase(), Phase::Ended);

        use Outcome::*;
        use Transition::*;
        let table = reader.table();
        assert_eq!(table.lookup(&Context::new(MachineWon, Repeated, MachineWon)), Memory::new(Unknown, Switched));
        assert_eq!(table.lookup(&Context::new(MachineWon, Switched, MachineLost)), Memory::new(Unknown, Repeated));
        assert_eq!(table.lookup(&Context::new(MachineLost, Repeated, MachineLost)), Memory::new(Unknown, Switched));
        assert_eq!(table.entries().last(), Some(&(Context::SENTINEL, Memory::new(Unknown, Repeated))));
        assert_eq!(table.lookup(&Context::SENTINEL), Memory::empty());
        assert_eq!(reader.context(), Context::new(MachineLost, Switched, MachineWon));
    }

    #[test]
    fn table_stays_bounded() {
        let ref mut reader = Reader::new(Flip::seeded(11));
        let ref mut coin = Flip::seeded(12);
        for _ in 0..5_000 {
            reader.observe(coin.flip());
            assert!(reader.table().len() <= TABLE_CAPACITY);
        }
        assert_eq!(reader.tally().rounds(), 5_000);
    }

    #[test]
    fn ending_leaves_last_completed_round() {
        let ref mut played = zeros();
        let ref mut source = script("0110");
        assert_eq!(played.rounds(source).count(), 4);
        assert_eq!(played.phase(), Phase::Ended);

        let ref mut observed = zeros();
        for n in [0, 1, 1, 0] {
            observed.observe(pick(n));
        }
        assert_eq!(played.table(), observed.table());
        assert_eq!(played.tally(), observed.tally());
        assert_eq!(played.context(), observed.context());
        assert_eq!(played.prediction(), observed.prediction());
    }

    #[test]
    fn ended_session_ignores_input() {
        let ref mut reader = zeros();
        let ref mut empty = Script::default();
        assert_eq!(reader.play(empty), None);
        assert_eq!(reader.phase(), Phase::Ended);

        let ref mut late = script("101");
        assert_eq!(reader.play(late), None);
        assert_eq!(late.remaining(), 3);
        assert_eq!(reader.observe(Pick::One), None);
        assert_eq!(reader.tally(), Tally::default());
        assert_eq!(reader.table(), &Table::default());
    }

    #[test]
    fn fresh_sessions_replay_identically() {
        let picks = "0110100111010001101111000";
        let ref mut a = Reader::new(Flip::seeded(9));
        let ref mut b = Reader::new(Flip::seeded(9));
        let xs = a.rounds(&mut script(picks)).collect::<Vec<_>>();
        let ys = b.rounds(&mut script(picks)).collect::<Vec<_>>();
        assert_eq!(xs.len(), picks.len());
        assert_eq!(xs, ys);
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn learns_a_repeater() {
        use Outcome::*;
        use Transition::*;
        let ref mut reader = zeros();
        let ref mut source = Script::from(vec![Pick::One; 24]);

        let early = reader.rounds(source).take(4).collect::<Vec<_>>();
        assert!(early.iter().all(|r| !r.machine_won()));
        assert!(early.iter().all(|r| r.guessed));
        assert!(early[..3].iter().all(|r| r.next_guessing));
        assert!(!early[3].next_guessing);
        let lrl = Context::new(MachineLost, Repeated, MachineLost);
        assert_eq!(reader.table().lookup(&lrl), Memory::new(Repeated, Repeated));
        assert_eq!(reader.decision(), Decision::RepeatLikely);
        assert_eq!(reader.prediction(), Pick::One);

        let late = reader.rounds(source).collect::<Vec<_>>();
        assert_eq!(late.len(), 20);
        assert!(late[0].machine_won());
        assert!(!late[0].guessed);
        assert!(late[12..].iter().all(|r| r.machine_won() && !r.guessed && !r.next_guessing));
        assert_eq!(reader.tally(), Tally { wins: 14, losses: 10, guesses: 9 });
        let wrw = Context::new(MachineWon, Repeated, MachineWon);
        assert_eq!(reader.context(), wrw);
        assert_eq!(reader.table().lookup(&wrw), Memory::new(Repeated, Repeated));
    }

    #[test]
    fn learns_an_alternator() {
        let ref mut reader = zeros();
        let ref mut source = (0..40).map(|i| pick(i % 2)).collect::<Script>();
        let rounds = reader.rounds(source).collect::<Vec<_>>();
        assert!(rounds[10..].iter().all(|r| r.machine_won()));
        assert_eq!(reader.decision(), Decision::SwitchLikely);
        assert_eq!(reader.tally(), Tally { wins: 36, losses: 4, guesses: 7 });
    }
}
