use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::TaskListState;
use crate::errors::AppResult;
use crate::store::TaskStore;
use crate::ui::messages::{info, success};

/// Toggle completion for a task. The matching record is patched in place
/// after the store confirms; no reload happens.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let (url, key) = cfg.store_credentials()?;
        let store = TaskStore::new(&url, &key, &cfg.table)?;
        let mut state = TaskListState::new(store);
        state.load().await?;

        let now_complete = state.toggle(*id).await?;

        if now_complete {
            success(format!("Task #{} marked as complete.", id));
        } else {
            info(format!("Task #{} reopened.", id));
        }

        super::refresh_snapshot(state.tasks());
    }

    Ok(())
}
