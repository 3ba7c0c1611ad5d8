//! Cached task snapshot backing the read-only widget view.
//!
//! The snapshot is rewritten after every successful store round-trip and
//! read back without touching the network, so the widget keeps rendering
//! while the store is unreachable.

use std::fs;
use std::path::Path;

use crate::models::task::Task;

/// Write the current collection to the snapshot file, creating the parent
/// directory if needed. Failures are the caller's to report; the snapshot
/// is auxiliary and must never block a store operation that already
/// succeeded.
pub fn write(path: &Path, tasks: &[Task]) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string(tasks).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/// Read the cached collection back. A missing snapshot is the widget's
/// empty state, not an error.
pub fn read(path: &Path) -> std::io::Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(std::io::Error::other)
}
