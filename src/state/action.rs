use crate::models::{Category, DayDocument, EquipmentItem, Inventory};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Everything that can change the inventory store.
///
/// Constructed by the session layer, applied by
/// [`reduce`](crate::state::reducer::reduce).
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the whole store (initial load and undo restore).
    SetData(Inventory),
    /// Insert `document` at `date` only when the date is absent.
    EnsureDayData {
        date: NaiveDate,
        document: DayDocument,
    },
    /// Append one fresh blank item to `store[date][category]`, fabricating
    /// a seeded day first when the date is absent.
    AddItem {
        date: NaiveDate,
        category: Category,
    },
    /// Replace the item matching `item.id` in place; append when the id is
    /// not found (recovery fallback for a stale id).
    UpdateItem {
        date: NaiveDate,
        category: Category,
        item: EquipmentItem,
    },
    /// Remove every listed id, refilling with one blank row if the list
    /// empties.
    DeleteItems {
        date: NaiveDate,
        category: Category,
        ids: BTreeSet<String>,
    },
    /// Wipe the store.
    ClearAllData,
}

impl Action {
    /// Undoable actions get a history snapshot pushed before dispatch;
    /// `SetData` and `EnsureDayData` do not.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Action::AddItem { .. }
                | Action::UpdateItem { .. }
                | Action::DeleteItems { .. }
                | Action::ClearAllData
        )
    }
}
