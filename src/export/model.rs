// src/export/model.rs

use crate::models::DayDocument;
use serde::Serialize;

/// Flat row shape shared by every export writer.
#[derive(Serialize, Clone, Debug)]
pub struct ItemExport {
    pub category: String,
    pub contract: String,
    pub serial: String,
    pub photos: usize,
}

/// Header for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["category", "contract", "serial", "photos"]
}

pub(crate) fn item_to_row(e: &ItemExport) -> Vec<String> {
    vec![
        e.category.clone(),
        e.contract.clone(),
        e.serial.clone(),
        e.photos.to_string(),
    ]
}

pub(crate) fn items_to_table(items: &[ItemExport]) -> Vec<Vec<String>> {
    items.iter().map(item_to_row).collect()
}

/// Flatten an aggregated document into export rows; only active items
/// reach a report.
pub fn document_rows(document: &DayDocument) -> Vec<ItemExport> {
    let mut rows = Vec::new();
    for (category, items) in document.iter() {
        for item in items.iter().filter(|item| item.is_active()) {
            rows.push(ItemExport {
                category: category.label().to_string(),
                contract: item.contract.trim().to_string(),
                serial: item.serial.trim().to_string(),
                photos: item.photos.len(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DayDocument, EquipmentItem};

    #[test]
    fn blank_rows_are_dropped() {
        let mut doc = DayDocument::seeded();
        let mut item = EquipmentItem::blank();
        item.contract = " C-1 ".into();
        item.photos.push("cGhvdG8=".into());
        doc.items_mut(Category::Camera).push(item);

        let rows = document_rows(&doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "CAMERA");
        assert_eq!(rows[0].contract, "C-1");
        assert_eq!(rows[0].photos, 1);
    }
}
