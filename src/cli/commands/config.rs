use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        theme,
    } = cmd
    {
        // ---- SET THEME ----
        if let Some(mode) = theme {
            match mode.as_str() {
                "light" | "dark" => {
                    // Reload from file so CLI-only overrides (--url/--key)
                    // are not persisted as a side effect.
                    let mut updated = Config::load();
                    updated.theme = mode.clone();
                    updated.save()?;
                    success(format!("Theme set to '{}'.", mode));
                }
                other => {
                    return Err(AppError::Config(format!(
                        "unknown theme '{}'. Use 'light' or 'dark'",
                        other
                    )));
                }
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }
    }

    Ok(())
}
