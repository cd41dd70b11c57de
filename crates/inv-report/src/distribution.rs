use std::collections::HashMap;

use inv_model::ItemRecord;

/// Label counted for items without a usable `type` field.
pub const UNKNOWN_TYPE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub label: String,
    pub count: usize,
}

/// Occurrence counts of the `type` field across an item collection.
///
/// Entries are held in descending count order; ties keep the order in which
/// each label was first seen in the source collection.
#[derive(Debug, Clone, Default)]
pub struct TypeDistribution {
    entries: Vec<TypeCount>,
}

impl TypeDistribution {
    pub fn from_items(items: &[ItemRecord]) -> Self {
        let mut entries: Vec<TypeCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for item in items {
            let label = item.type_label().unwrap_or_else(|| UNKNOWN_TYPE.to_string());
            match index.get(&label) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(label.clone(), entries.len());
                    entries.push(TypeCount { label, count: 1 });
                }
            }
        }
        // Stable sort on count only, so first-seen order survives ties.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn entries(&self) -> &[TypeCount] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the size of the source collection.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
