use crate::config::Config;
use crate::errors::AppResult;
use crate::store::snapshot;
use crate::utils::render::render_widget;

/// Render the read-only widget view from the cached snapshot.
/// Never touches the network; the snapshot is refreshed as a side effect
/// of the other commands.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let tasks = snapshot::read(&Config::snapshot_file())?;

    if tasks.is_empty() {
        println!("No tasks yet");
        return Ok(());
    }

    print!("{}", render_widget(&tasks, cfg.widget_limit));
    Ok(())
}
