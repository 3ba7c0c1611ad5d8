use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::TaskListState;
use crate::errors::{AppError, AppResult};
use crate::store::TaskStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (url, key) = cfg.store_credentials()?;
        let store = TaskStore::new(&url, &key, &cfg.table)?;
        let mut state = TaskListState::new(store);
        state.load().await?;

        let text = state
            .tasks()
            .iter()
            .find(|t| t.id == *id)
            .map(|t| t.task.clone())
            .ok_or(AppError::UnknownTask(*id))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete task #{} (\"{}\")? This action is irreversible.",
            id, text
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        state.remove(*id).await?;
        success(format!("Task #{} has been deleted.", id));

        super::refresh_snapshot(state.tasks());
    }

    Ok(())
}
