use super::DayDocument;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The full date-keyed inventory; the aggregate root of persisted state.
///
/// Day documents sit behind `Arc` so that history snapshots and successive
/// store values share every day a mutation did not touch. Dates serialize
/// as `YYYY-MM-DD` payload keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    days: BTreeMap<NaiveDate, Arc<DayDocument>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of recorded days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Arc<DayDocument>> {
        self.days.get(&date)
    }

    /// The document for `date`, or the empty document when the date was
    /// never recorded.
    pub fn document_for(&self, date: NaiveDate) -> DayDocument {
        self.days
            .get(&date)
            .map(|doc| DayDocument::clone(doc))
            .unwrap_or_default()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, document: DayDocument) {
        self.days.insert(date, Arc::new(document));
    }

    pub(crate) fn day_mut(&mut self, date: NaiveDate) -> Option<&mut Arc<DayDocument>> {
        self.days.get_mut(&date)
    }

    pub(crate) fn remove_all(&mut self) {
        self.days.clear();
    }

    /// Recorded days in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Arc<DayDocument>)> {
        self.days.iter().map(|(date, doc)| (*date, doc))
    }

    /// True when both stores hold the identical allocation for `date`.
    /// This is the cheap no-change check rendering and tests rely on.
    pub fn shares_day_with(&self, other: &Inventory, date: NaiveDate) -> bool {
        match (self.day(date), other.day(date)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
