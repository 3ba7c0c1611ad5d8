use clap::{Parser, Subcommand};

/// Command-line interface definition for rtodo
/// CLI application to manage a to-do list stored in a remote hosted database
#[derive(Parser)]
#[command(
    name = "rtodo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple to-do list CLI: add, list, complete and delete tasks backed by a remote store",
    long_about = None
)]
pub struct Cli {
    /// Override the store endpoint URL (useful for tests or a custom store)
    #[arg(global = true, long = "url")]
    pub url: Option<String>,

    /// Override the store access key
    #[arg(global = true, long = "key")]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or change the theme)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "theme", help = "Set the color theme (light or dark)")]
        theme: Option<String>,
    },

    /// Add a new task
    Add {
        /// Task text
        text: String,
    },

    /// List tasks grouped by day, newest day first
    List {
        #[arg(
            long = "date",
            short = 'd',
            help = "Show only tasks created on this date (YYYY-MM-DD)"
        )]
        date: Option<String>,
    },

    /// Toggle completion for a task
    Done {
        /// Task id
        id: i64,
    },

    /// Delete a task by id
    Del {
        /// Task id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show the cached widget view (first five tasks, read-only)
    Widget,
}
