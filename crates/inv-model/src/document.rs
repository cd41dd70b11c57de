use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ItemRecord;

/// Top-level view of an inventory export.
///
/// Only the `descriptions` array is interpreted; every other top-level field
/// is carried through untouched so a filtered document can be written back
/// without losing metadata the exporter put there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// The item collection. Absent in the source means an empty inventory,
    /// not an error.
    #[serde(default)]
    pub descriptions: Vec<ItemRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InventoryDocument {
    pub fn item_count(&self) -> usize {
        self.descriptions.len()
    }

    /// Replace the item collection, keeping all other top-level fields.
    #[must_use]
    pub fn with_descriptions(mut self, descriptions: Vec<ItemRecord>) -> Self {
        self.descriptions = descriptions;
        self
    }
}
