//! CLI module for recipe-categories.
//!
//! Subcommands:
//! - `list`: Print every category in sidebar order
//! - `show`: Decode a category identity and print it

mod list;
mod output;
mod show;

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputFormat};

pub use output::{render_many, render_one, CategoryResult};

/// recipe-categories - inspect the recipe sidebar groupings
#[derive(Parser)]
#[command(name = "recipe-categories")]
#[command(about = "Inspect recipe categories used to group sidebar items")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides configuration)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all categories in sidebar order
    List,

    /// Show the category with the given identity
    Show {
        /// Category identity (0-3)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        tracing::debug!(?config, "Loaded configuration");

        let format = self.format.unwrap_or(config.output.format);

        match self.command {
            Command::List => self.run_list(format),
            Command::Show { id } => self.run_show(id, format),
        }
    }
}
