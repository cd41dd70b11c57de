pub mod document;
pub mod error;
pub mod item;

pub use document::InventoryDocument;
pub use error::{InventoryError, Result};
pub use item::{ItemRecord, MISSING_FIELD};
