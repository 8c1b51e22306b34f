//! Read-only queries over the inventory store: report aggregation and
//! cross-date search. Export and share collaborators consume these and
//! never reach into the store's internal shape.

use crate::models::{Category, DayDocument, EquipmentItem, Inventory};
use chrono::{Datelike, NaiveDate};

/// What a report or share covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One calendar day (today or an explicitly chosen date).
    Day(NaiveDate),
    /// Every day from the 1st of the month through the given day.
    MonthToDate(NaiveDate),
}

impl Scope {
    /// Human title used by exports and shares.
    pub fn label(&self) -> String {
        match self {
            Scope::Day(d) => d.format("%Y-%m-%d").to_string(),
            Scope::MonthToDate(d) => {
                format!("Month {}/{} (through day {})", d.month(), d.year(), d.day())
            }
        }
    }
}

/// Fold the store into a single synthetic document for `scope`.
///
/// Day scope returns the stored document (or the empty one when the date
/// was never recorded). Month-to-date concatenates each present day's
/// *active* items per category in ascending date order; untouched blank
/// rows never reach a report. Pure fold, never mutates the store.
pub fn aggregate(store: &Inventory, scope: Scope) -> DayDocument {
    match scope {
        Scope::Day(date) => store.document_for(date),
        Scope::MonthToDate(date) => {
            let mut result = DayDocument::empty();
            for day in days_through(date) {
                let Some(doc) = store.day(day) else { continue };
                for category in Category::ALL {
                    let active = doc
                        .items(category)
                        .iter()
                        .filter(|item| item.is_active())
                        .cloned();
                    result.items_mut(category).extend(active);
                }
            }
            result
        }
    }
}

fn days_through(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (1..=date.day()).filter_map(move |d| NaiveDate::from_ymd_opt(date.year(), date.month(), d))
}

/// One search hit.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub category: Category,
    pub item: EquipmentItem,
}

/// Shortest query `search` accepts.
pub const MIN_QUERY_LEN: usize = 2;
/// Result cap; more than this is unusable in a picker anyway.
pub const MAX_RESULTS: usize = 50;

/// Case-insensitive substring search over contract and serial across all
/// dates, in ascending date order.
pub fn search(store: &Inventory, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut hits = Vec::new();
    'scan: for (date, doc) in store.iter() {
        for (category, items) in doc.iter() {
            for item in items {
                if item.contract.to_lowercase().contains(&needle)
                    || item.serial.to_lowercase().contains(&needle)
                {
                    hits.push(SearchHit {
                        date,
                        category,
                        item: item.clone(),
                    });
                    if hits.len() >= MAX_RESULTS {
                        break 'scan;
                    }
                }
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, reduce};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Build a store where `days` each carry one active CAMERA item whose
    /// serial records the day number.
    fn store_with_active_days(days: &[u32]) -> Inventory {
        let mut store = Inventory::new();
        for &d in days {
            let day = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            store = reduce(
                store,
                Action::AddItem {
                    date: day,
                    category: Category::Camera,
                },
            );
            let mut item = store.day(day).unwrap().items(Category::Camera)[0].clone();
            item.serial = format!("SN-day-{d}");
            store = reduce(
                store,
                Action::UpdateItem {
                    date: day,
                    category: Category::Camera,
                    item,
                },
            );
        }
        store
    }

    #[test]
    fn day_scope_of_an_absent_date_is_empty() {
        let store = Inventory::new();
        let doc = aggregate(&store, Scope::Day(date("2024-03-05")));
        assert!(doc.is_blank());
    }

    #[test]
    fn month_to_date_collects_active_items_in_date_order() {
        // active on days 3 and 7, blank-only day 5
        let mut store = store_with_active_days(&[3, 7]);
        store = reduce(
            store,
            Action::EnsureDayData {
                date: date("2024-03-05"),
                document: crate::models::DayDocument::seeded(),
            },
        );

        let doc = aggregate(&store, Scope::MonthToDate(date("2024-03-10")));
        let cameras = doc.items(Category::Camera);
        assert_eq!(cameras.len(), 2);
        assert_eq!(cameras[0].serial, "SN-day-3");
        assert_eq!(cameras[1].serial, "SN-day-7");
        // the blank rows of day 3/5/7 never reach the report
        for category in Category::ALL {
            if category != Category::Camera {
                assert!(doc.items(category).is_empty());
            }
        }
    }

    #[test]
    fn month_to_date_ignores_days_after_the_cutoff() {
        let store = store_with_active_days(&[3, 20]);
        let doc = aggregate(&store, Scope::MonthToDate(date("2024-03-10")));
        assert_eq!(doc.items(Category::Camera).len(), 1);
    }

    #[test]
    fn search_matches_contract_and_serial_case_insensitively() {
        let store = store_with_active_days(&[3, 7]);
        let hits = search(&store, "sn-DAY");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].date, date("2024-03-03"));
        assert_eq!(hits[0].category, Category::Camera);

        assert_eq!(search(&store, "day-7").len(), 1);
        assert!(search(&store, "missing").is_empty());
    }

    #[test]
    fn short_queries_return_nothing() {
        let store = store_with_active_days(&[3]);
        assert!(search(&store, "s").is_empty());
        assert!(search(&store, "  ").is_empty());
    }

    #[test]
    fn results_are_capped() {
        let mut store = Inventory::new();
        for d in 1..=28 {
            let day = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            for _ in 0..3 {
                store = reduce(
                    store,
                    Action::AddItem {
                        date: day,
                        category: Category::Box,
                    },
                );
            }
            let items = store.day(day).unwrap().items(Category::Box).to_vec();
            for mut item in items {
                item.contract = "CT-same".into();
                store = reduce(
                    store,
                    Action::UpdateItem {
                        date: day,
                        category: Category::Box,
                        item,
                    },
                );
            }
        }

        assert_eq!(search(&store, "ct-same").len(), MAX_RESULTS);
    }
}
