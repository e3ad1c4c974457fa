use clap::Parser;
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use cybertasks::cli::{self, Cli};
use cybertasks::tui::{self, App};
use cybertasks::{config, logging, Result};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(mut cli: Cli) -> Result<()> {
    let root = Path::new(".");

    // Subcommands print and exit without touching the terminal UI
    if let Some(command) = cli.command.take() {
        logging::install_stderr();
        return cli::run_command(command, root, &mut stdout());
    }

    let config = config::load_config(root)?;
    if let Some(log_file) = &config.log_file {
        logging::install_file(Path::new(log_file))?;
    }

    let board = cli::initial_board(&cli, &config);
    tui::run(App::new(board), Duration::from_millis(config.tick_rate_ms))
}
