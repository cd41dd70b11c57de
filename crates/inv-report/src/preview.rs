use inv_model::ItemRecord;

/// Number of items shown in the report preview.
pub const PREVIEW_LIMIT: usize = 5;

/// The four fixed fields printed for each previewed item, already rendered
/// with the `N/A` placeholder substituted for anything missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub name: String,
    pub type_label: String,
    pub classid: String,
    pub tradable: String,
}

impl PreviewRow {
    fn from_item(item: &ItemRecord) -> Self {
        Self {
            name: item.display_field("name"),
            type_label: item.display_field("type"),
            classid: item.display_field("classid"),
            tradable: item.display_field("tradable"),
        }
    }
}

/// Render the first `min(PREVIEW_LIMIT, total)` items for display.
pub fn preview(items: &[ItemRecord]) -> Vec<PreviewRow> {
    items
        .iter()
        .take(PREVIEW_LIMIT)
        .map(PreviewRow::from_item)
        .collect()
}
