use clap::{Parser, Subcommand};

/// Command-line interface definition for rFintrack
/// CLI application to track income and expenses in CSV files
#[derive(Parser)]
#[command(
    name = "rfintrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple finance tracking CLI: record income and expenses, keep audit logs and view reports",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a separate ledger)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the CSV tables
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the interactive menu
    Menu,
}
