pub mod add;
pub mod config;
pub mod del;
pub mod done;
pub mod init;
pub mod list;
pub mod widget;

use crate::config::Config;
use crate::models::task::Task;
use crate::store::snapshot;
use crate::ui::messages::warning;

/// Rewrite the widget snapshot after a successful store round-trip.
/// Snapshot failures are reported but never fail the command (non-blocking,
/// like the widget itself).
pub(crate) fn refresh_snapshot(tasks: &[Task]) {
    if let Err(e) = snapshot::write(&Config::snapshot_file(), tasks) {
        warning(format!("Failed to refresh widget snapshot: {}", e));
    }
}
