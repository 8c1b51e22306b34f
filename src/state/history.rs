use crate::models::Inventory;
use std::collections::VecDeque;

/// How many pre-mutation snapshots the undo buffer keeps.
pub const UNDO_DEPTH: usize = 10;

/// Bounded undo buffer of full store snapshots, most recent first.
///
/// Snapshots are cheap: day documents are `Arc`-shared with the live
/// store, so a snapshot only pins the days that later mutations replace.
#[derive(Debug, Default)]
pub struct History {
    snapshots: VecDeque<Inventory>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a pre-mutation snapshot, evicting the oldest past the cap.
    /// The push-and-truncate pair is the single step that maintains the
    /// bound.
    pub fn push(&mut self, snapshot: Inventory) {
        self.snapshots.push_front(snapshot);
        self.snapshots.truncate(UNDO_DEPTH);
    }

    /// Take the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Inventory> {
        self.snapshots.pop_front()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayDocument;
    use chrono::NaiveDate;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn marked(d: u32) -> Inventory {
        let mut store = Inventory::new();
        store.insert(day(d), DayDocument::empty());
        store
    }

    #[test]
    fn pop_returns_most_recent_first() {
        let mut history = History::new();
        history.push(marked(1));
        history.push(marked(2));

        assert!(history.pop().unwrap().contains(day(2)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn eleventh_push_evicts_the_oldest() {
        let mut history = History::new();
        for d in 1..=11 {
            history.push(marked(d));
        }

        assert_eq!(history.len(), UNDO_DEPTH);
        // most recent on top, day 1 gone
        assert!(history.pop().unwrap().contains(day(11)));
        let mut last = None;
        while let Some(snapshot) = history.pop() {
            last = Some(snapshot);
        }
        assert!(last.unwrap().contains(day(2)));
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut history = History::new();
        assert_eq!(history.pop(), None);
    }
}
