//! The single place inventory mutation logic lives.

use super::action::Action;
use crate::models::{DayDocument, EquipmentItem, Inventory};
use std::sync::Arc;

/// Apply `action` to `store`, producing the next store value.
///
/// Pure and total: no-op cases hand the input back unchanged, and every
/// mutating case re-allocates only the touched day, so a snapshot of the
/// previous value keeps sharing all other days with the result.
pub fn reduce(store: Inventory, action: Action) -> Inventory {
    match action {
        Action::SetData(next) => next,

        Action::EnsureDayData { date, document } => {
            if store.contains(date) {
                return store;
            }
            let mut next = store;
            next.insert(date, document);
            next
        }

        Action::AddItem { date, category } => {
            let mut next = store;
            if !next.contains(date) {
                // A freshly fabricated day already carries one blank row
                // per category; the one under `category` is the added item.
                next.insert(date, DayDocument::seeded());
                return next;
            }
            if let Some(day) = next.day_mut(date) {
                Arc::make_mut(day).push(category, EquipmentItem::blank());
            }
            next
        }

        Action::UpdateItem {
            date,
            category,
            item,
        } => {
            let mut next = store;
            if let Some(day) = next.day_mut(date) {
                let list = Arc::make_mut(day).items_mut(category);
                match list.iter_mut().find(|existing| existing.id == item.id) {
                    Some(slot) => *slot = item,
                    None => list.push(item),
                }
            }
            next
        }

        Action::DeleteItems {
            date,
            category,
            ids,
        } => {
            let mut next = store;
            if let Some(day) = next.day_mut(date) {
                let list = Arc::make_mut(day).items_mut(category);
                list.retain(|item| !ids.contains(&item.id));
                if list.is_empty() {
                    // a category never stays empty after a deletion
                    list.push(EquipmentItem::blank());
                }
            }
            next
        }

        Action::ClearAllData => {
            let mut next = store;
            next.remove_all();
            next
        }
    }
}
