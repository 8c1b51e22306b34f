use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The five fixed equipment categories.
///
/// Labels double as JSON keys inside the persisted payload, so they must
/// stay stable across versions. The Portuguese label written by the legacy
/// app is still accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Box,
    BoxSound,
    RemoteControl,
    Camera,
    Chip,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Box,
        Category::BoxSound,
        Category::RemoteControl,
        Category::Camera,
        Category::Chip,
    ];

    /// Stable label used as a payload key and in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Box => "BOX",
            Category::BoxSound => "BOX SOUND",
            Category::RemoteControl => "REMOTE CONTROL",
            Category::Camera => "CAMERA",
            Category::Chip => "CHIP",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Box => "box",
            Category::BoxSound => "sound",
            Category::RemoteControl => "remote",
            Category::Camera => "camera",
            Category::Chip => "chip",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "box" => Some(Category::Box),
            "sound" | "box-sound" => Some(Category::BoxSound),
            "remote" | "control" => Some(Category::RemoteControl),
            "camera" => Some(Category::Camera),
            "chip" => Some(Category::Chip),
            _ => None,
        }
    }

    /// Parse a stored label. "CONTROLE REMOTO" is the legacy spelling kept
    /// for payloads migrated from the flat key-value store.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "BOX" => Some(Category::Box),
            "BOX SOUND" => Some(Category::BoxSound),
            "REMOTE CONTROL" | "CONTROLE REMOTO" => Some(Category::RemoteControl),
            "CAMERA" => Some(Category::Camera),
            "CHIP" => Some(Category::Chip),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

struct CategoryVisitor;

impl Visitor<'_> for CategoryVisitor {
    type Value = Category;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an equipment category label")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Category, E> {
        Category::from_label(value)
            .ok_or_else(|| E::custom(format!("unknown equipment category '{value}'")))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CategoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
            assert_eq!(Category::from_code(cat.code()), Some(cat));
        }
    }

    #[test]
    fn legacy_label_is_accepted() {
        assert_eq!(
            Category::from_label("CONTROLE REMOTO"),
            Some(Category::RemoteControl)
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(Category::from_label("TRIPOD"), None);
        assert_eq!(Category::from_code("tripod"), None);
    }
}
