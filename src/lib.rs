//! rtodo library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg).await,
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg).await,
        Commands::Done { .. } => cli::commands::done::handle(&cli.command, cfg).await,
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg).await,
        Commands::Widget => cli::commands::widget::handle(cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    env_logger::init();

    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config ONCE
    let mut cfg = Config::load();

    // 3. apply store overrides from the command line (used by tests)
    if let Some(url) = &cli.url {
        cfg.store_url = Some(url.clone());
    }
    if let Some(key) = &cli.key {
        cfg.store_key = Some(key.clone());
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg).await
}
