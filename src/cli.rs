use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;

use crate::board::Board;
use crate::category;
use crate::config::{self, Config};
use crate::error::Result;
use crate::query::StatusFilter;
use crate::store::TaskStore;

#[derive(Parser, Debug)]
#[command(name = "cybertasks")]
#[command(about = "A neon-themed terminal to-do list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start with an empty list instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    /// Initial status filter
    #[arg(long, value_enum)]
    pub filter: Option<StatusFilter>,

    /// Initial search query
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .cybertasks/ with a default config in the current directory
    Init,
    /// Print the category a task with this text would be filed under
    Suggest {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Session state for the interactive UI, built from flags and config
pub fn initial_board(cli: &Cli, config: &Config) -> Board {
    let store = if cli.empty || !config.seed_demo_tasks {
        TaskStore::new()
    } else {
        TaskStore::demo(Utc::now())
    };

    let mut board = Board::new(store);
    board.filter = cli.filter.unwrap_or(config.default_filter);
    if let Some(search) = &cli.search {
        board.search = search.clone();
    }
    board
}

/// Run a non-interactive subcommand, writing user-facing output to `out`
pub fn run_command(command: Commands, root: &Path, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Init => {
            let path = config::init_project(root)?;
            writeln!(out, "Initialized CyberTasks")?;
            writeln!(out, "  config: {}", path.display())?;
            writeln!(out, "Run 'cybertasks' for the interactive UI")?;
        }
        Commands::Suggest { text } => {
            let text = text.join(" ");
            writeln!(out, "{}", category::suggest(&text))?;
        }
    }
    Ok(())
}
