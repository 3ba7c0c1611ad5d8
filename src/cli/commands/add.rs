use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::TaskListState;
use crate::errors::AppResult;
use crate::store::TaskStore;
use crate::ui::messages::{success, warning};

/// Add a new task, then reload the collection and refresh the widget
/// snapshot. Blank text performs no store call at all.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { text } = cmd {
        if text.trim().is_empty() {
            warning("Nothing to add: task text is empty.");
            return Ok(());
        }

        let (url, key) = cfg.store_credentials()?;
        let store = TaskStore::new(&url, &key, &cfg.table)?;
        let mut state = TaskListState::new(store);

        state.create(text).await?;
        success(format!("Task added: {}", text.trim()));

        super::refresh_snapshot(state.tasks());
    }

    Ok(())
}
