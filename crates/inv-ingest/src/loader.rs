use std::fs;
use std::path::Path;

use tracing::{debug, info};

use inv_model::{InventoryDocument, InventoryError, Result};

/// Load an inventory document from a JSON file.
///
/// A missing or unreadable file and malformed top-level JSON are fatal; a
/// document without a `descriptions` field loads as an empty inventory.
pub fn load_inventory(path: &Path) -> Result<InventoryDocument> {
    let raw = fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read inventory file");

    let document: InventoryDocument =
        serde_json::from_str(&raw).map_err(|source| InventoryError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        items = document.item_count(),
        "inventory loaded"
    );
    Ok(document)
}
