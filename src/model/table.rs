/// Bounded store of recent transitions, keyed by [`Context`].
///
/// A fresh table holds all eight complete contexts with no evidence. Incomplete
/// contexts share the single [`Context::SENTINEL`] entry, so the table never
/// grows past [`TABLE_CAPACITY`](crate::TABLE_CAPACITY) entries regardless of session length.
/// Lookups are total: an incomplete context, or one with no entry, reads as
/// [`Memory::empty`]. The sentinel only absorbs records; it is never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table(HashMap<Context, Memory>);

impl Default for Table {
    fn default() -> Self {
        Self(
            Context::seeded()
                .into_iter()
                .map(|context| (context, Memory::empty()))
                .collect(),
        )
    }
}

impl Table {
    /// Recent transitions observed under `context`.
    pub fn lookup(&self, context: &Context) -> Memory {
        match context.is_complete() {
            true => self.0.get(context).copied().unwrap_or_default(),
            false => Memory::empty(),
        }
    }
    /// Remember that the human made `transition` while in `context`.
    pub fn record(&mut self, context: &Context, transition: Transition) {
        let key = context.canonical();
        let memory = self.0.entry(key).or_default();
        memory.shift(transition);
        log::trace!("[table] {} <- {} = {}", key, transition, memory);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Entries in context index order, sentinel last.
    pub fn entries(&self) -> Vec<(Context, Memory)> {
        let mut entries = self.0.iter().map(|(c, m)| (*c, *m)).collect::<Vec<_>>();
        entries.sort_by_key(|(c, _)| c.index().unwrap_or(usize::MAX));
        entries
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (context, memory) in self.entries() {
            writeln!(f, "{} {}", context, memory)?;
        }
        Ok(())
    }
}

use super::memory::Memory;
use crate::game::Context;
use crate::game::Transition;
use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TABLE_CAPACITY;
    use crate::game::Outcome;
    use crate::model::Decision;

    fn lrl() -> Context {
        Context::new(Outcome::MachineLost, Transition::Repeated, Outcome::MachineLost)
    }

    #[test]
    fn fresh_table_is_seeded() {
        let table = Table::default();
        assert_eq!(table.len(), 8);
        for context in Context::seeded() {
            assert_eq!(table.lookup(&context), Memory::empty());
        }
    }

    fn incomplete() -> Vec<Context> {
        let outcomes = [Outcome::MachineLost, Outcome::MachineWon, Outcome::Unset];
        let transitions = [Transition::Repeated, Transition::Switched, Transition::Unknown];
        let mut contexts = Vec::new();
        for prev in outcomes {
            for last in transitions {
                for curr in outcomes {
                    contexts.push(Context::new(prev, last, curr));
                }
            }
        }
        contexts.retain(|c| !c.is_complete());
        contexts
    }

    #[test]
    fn lookup_is_total() {
        let table = Table::default();
        let contexts = incomplete();
        assert_eq!(contexts.len(), 19);
        for context in contexts {
            assert_eq!(table.lookup(&context), Memory::empty());
        }
    }

    #[test]
    fn sentinel_records_are_never_read_back() {
        let mut table = Table::default();
        let early = Context::new(Outcome::Unset, Transition::Unknown, Outcome::MachineWon);
        table.record(&early, Transition::Repeated);
        table.record(&early, Transition::Repeated);
        let untouched = Context::new(Outcome::MachineWon, Transition::Unknown, Outcome::MachineLost);
        assert_eq!(table.lookup(&untouched), Memory::empty());
        assert_eq!(Decision::from(table.lookup(&untouched)), Decision::Unpredictable);
        for context in incomplete() {
            assert_eq!(table.lookup(&context), Memory::empty());
        }
        for context in Context::seeded() {
            assert_eq!(table.lookup(&context), Memory::empty());
        }
    }

    #[test]
    fn record_shifts_pair() {
        let mut table = Table::default();
        table.record(&lrl(), Transition::Repeated);
        assert_eq!(
            table.lookup(&lrl()),
            Memory::new(Transition::Unknown, Transition::Repeated)
        );
        table.record(&lrl(), Transition::Switched);
        assert_eq!(
            table.lookup(&lrl()),
            Memory::new(Transition::Repeated, Transition::Switched)
        );
    }

    #[test]
    fn record_leaves_other_contexts() {
        let mut table = Table::default();
        table.record(&lrl(), Transition::Switched);
        for context in Context::seeded().into_iter().filter(|c| *c != lrl()) {
            assert_eq!(table.lookup(&context), Memory::empty());
        }
    }

    #[test]
    fn incomplete_contexts_share_sentinel() {
        let mut table = Table::default();
        table.record(&Context::SENTINEL, Transition::Unknown);
        assert_eq!(table.len(), 9);
        let early = Context::SENTINEL.shift(Transition::Unknown, Outcome::MachineWon);
        table.record(&early, Transition::Repeated);
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.entries().last(),
            Some(&(Context::SENTINEL, Memory::new(Transition::Unknown, Transition::Repeated)))
        );
        assert_eq!(table.lookup(&Context::SENTINEL), Memory::empty());
    }

    #[test]
    fn display_lists_seeded_before_sentinel() {
        let mut table = Table::default();
        table.record(&Context::SENTINEL, Transition::Unknown);
        table.record(&lrl(), Transition::Repeated);
        let text = table.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "L=L (?=)");
        assert_eq!(lines[8], "??? (??)");
    }

    #[test]
    fn bounded_memory() {
        let mut table = Table::default();
        let keys = Context::seeded();
        let transitions = Transition::known();
        for i in 0..10_000 {
            table.record(&Context::SENTINEL, Transition::Unknown);
            table.record(&keys[i % keys.len()], transitions[i % 3 % 2]);
        }
        assert!(table.len() <= TABLE_CAPACITY);
    }
}
