use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::group::group_tasks_by_date;
use crate::core::state::TaskListState;
use crate::errors::{AppError, AppResult};
use crate::store::TaskStore;
use crate::ui::theme;
use crate::utils::date;
use crate::utils::render::render_sections;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_arg } = cmd {
        //
        // 1. Parse the optional date filter
        //
        let filter_date = match date_arg {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => None,
        };

        //
        // 2. Full reload from the store
        //
        let (url, key) = cfg.store_credentials()?;
        let store = TaskStore::new(&url, &key, &cfg.table)?;
        let mut state = TaskListState::new(store);
        state.load().await?;

        super::refresh_snapshot(state.tasks());

        //
        // 3. Group and render
        //
        let sections = group_tasks_by_date(state.tasks(), filter_date);

        if sections.is_empty() {
            // Wording depends solely on whether a filter is set.
            if filter_date.is_some() {
                println!("No tasks for this date.");
            } else {
                println!("No tasks yet. Add one!");
            }
            return Ok(());
        }

        let palette = theme::palette_for(&cfg.theme);
        print!("{}", render_sections(&sections, &palette));
    }

    Ok(())
}
