//! Inventory ingestion: reads a JSON inventory export from disk and hands the
//! parsed document to the report and filter stages.

mod loader;

pub use loader::load_inventory;
