use inv_cli::render::{distribution_table, removed_items_table, render_matches, render_preview};

use crate::types::{FilterResult, ReportResult};

pub fn print_report(result: &ReportResult) {
    println!("🔍 Analyzing {}...\n", result.source.display());
    println!("Total items: {}\n", result.total);

    println!("📋 First 5 items:");
    if result.preview.is_empty() {
        println!("   (no items)");
    } else {
        print!("{}", render_preview(&result.preview));
    }

    println!("\n📊 Item types distribution:");
    if result.distribution.is_empty() {
        println!("   (no items)");
    } else {
        println!("{}", distribution_table(&result.distribution));
    }

    println!("\n🔎 Keyword search:");
    print!("{}", render_matches(&result.matches));
}

pub fn print_filter_summary(result: &FilterResult) {
    println!("🔍 Filtering {}...\n", result.source.display());
    println!("Total items before filtering: {}", result.before);
    println!("Removed items: {}", result.removed.len());
    println!("Remaining items: {}", result.remaining);

    if !result.removed.is_empty() {
        println!("\n🗑️  Removed items:");
        println!("{}", removed_items_table(&result.removed));
    }

    match &result.output {
        Some(path) => println!("\n💾 Saved to {}", path.display()),
        None => println!("\nDry run - nothing written"),
    }
}
