use super::{Category, EquipmentItem};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One calendar day's equipment, grouped by category.
///
/// Every category key is always present. Constructors guarantee it, the
/// reducer maintains it, and deserialization restores it for payloads
/// written by older app versions that omitted empty categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DayDocument {
    items: BTreeMap<Category, Vec<EquipmentItem>>,
}

impl DayDocument {
    /// All categories empty. The zero value for read-time aggregation.
    pub fn empty() -> Self {
        Self::from_map(BTreeMap::new())
    }

    /// Every category seeded with one blank input row. Used when a day is
    /// first touched for editing.
    pub fn seeded() -> Self {
        let mut items = BTreeMap::new();
        for category in Category::ALL {
            items.insert(category, vec![EquipmentItem::blank()]);
        }
        Self { items }
    }

    fn from_map(mut map: BTreeMap<Category, Vec<EquipmentItem>>) -> Self {
        for category in Category::ALL {
            map.entry(category).or_default();
        }
        Self { items: map }
    }

    pub fn items(&self, category: Category) -> &[EquipmentItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn items_mut(&mut self, category: Category) -> &mut Vec<EquipmentItem> {
        self.items.entry(category).or_default()
    }

    pub(crate) fn push(&mut self, category: Category, item: EquipmentItem) {
        self.items_mut(category).push(item);
    }

    /// Categories in display order, with their item lists.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[EquipmentItem])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.items(category)))
    }

    /// Linear lookup of an item by id across all categories.
    pub fn find_item(&self, id: &str) -> Option<(Category, &EquipmentItem)> {
        self.iter().find_map(|(category, items)| {
            items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (category, item))
        })
    }

    pub fn active_count(&self) -> usize {
        self.iter()
            .map(|(_, items)| items.iter().filter(|i| i.is_active()).count())
            .sum()
    }

    /// True when no item in any category holds user data.
    pub fn is_blank(&self) -> bool {
        self.active_count() == 0
    }
}

impl Default for DayDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'de> Deserialize<'de> for DayDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Category, Vec<EquipmentItem>>::deserialize(deserializer)?;
        Ok(Self::from_map(map))
    }
}
