use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with defaults
///
/// Store credentials are filled in by the user afterwards (config file,
/// environment variables, or --url/--key).
pub fn handle(_cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rtodo…");

    Config::init_all()?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 rtodo initialization completed!");
    Ok(())
}
