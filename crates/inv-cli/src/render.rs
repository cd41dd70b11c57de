//! Text rendering for report sections.
//!
//! Pure string builders so the exact output can be tested without running
//! the binary; `summary` glues the sections together around the tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_report::{KeywordMatch, MATCH_DISPLAY_LIMIT, PreviewRow, RemovedItem, TypeDistribution};

/// Numbered preview entries, one block of four fields per item.
pub fn render_preview(rows: &[PreviewRow]) -> String {
    let mut out = String::new();
    for (position, row) in rows.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. Name: {}\n", position + 1, row.name));
        out.push_str(&format!("   Type: {}\n", row.type_label));
        out.push_str(&format!("   ClassID: {}\n", row.classid));
        out.push_str(&format!("   Tradable: {}", row.tradable));
        out.push('\n');
    }
    out
}

/// Keyword match listing, capped at [`MATCH_DISPLAY_LIMIT`] entries, or the
/// single not-found line when nothing matched.
pub fn render_matches(matches: &[KeywordMatch]) -> String {
    if matches.is_empty() {
        return "   No items found with these keywords\n".to_string();
    }
    let mut out = format!("   Found {} items:\n", matches.len());
    for matched in matches.iter().take(MATCH_DISPLAY_LIMIT) {
        out.push_str(&format!("   - {} (matched: {})\n", matched.name, matched.keyword));
    }
    out
}

/// Type/count table in descending count order.
pub fn distribution_table(distribution: &TypeDistribution) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in distribution.entries() {
        table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.count)]);
    }
    table
}

/// Removed-item table for the filter summary.
pub fn removed_items_table(removed: &[RemovedItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("ClassID"),
        header_cell("Matched"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for item in removed {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(&item.classid),
            Cell::new(&item.keyword).fg(Color::Yellow),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
