use crate::utils::id;
use serde::{Deserialize, Serialize};

/// A single tracked piece of equipment.
///
/// `contract` and `serial` are free text (the form caps them at 11 and 25
/// characters; the model does not enforce that). `photos` holds
/// base64-encoded image blobs, append-only in normal use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    #[serde(default)]
    pub contract: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl EquipmentItem {
    /// Fresh blank input row with a new id.
    pub fn blank() -> Self {
        Self {
            id: id::mint(),
            contract: String::new(),
            serial: String::new(),
            photos: Vec::new(),
        }
    }

    /// An item counts toward reports once the user typed anything into it
    /// or attached a photo.
    pub fn is_active(&self) -> bool {
        !self.contract.trim().is_empty()
            || !self.serial.trim().is_empty()
            || !self.photos.is_empty()
    }
}
