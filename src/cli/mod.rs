// CLI module - process entry commands

pub mod migrate;

use clap::{Parser, Subcommand};

/// Items backend CLI
#[derive(Parser, Debug)]
#[command(name = "items-backend")]
#[command(about = "Item resource service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations, then serve the HTTP API (default)
    Serve,

    /// Run database migrations and exit
    Migrate,
}

impl Cli {
    /// The command to run, defaulting to `serve`
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
