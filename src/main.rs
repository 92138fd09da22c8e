use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use todos::cli::Cli;
use todos::cli::handlers::SessionContext;
use todos::cli::session::run_session;
use todos::config::TodoConfig;
use todos::logging;
use todos::state::TodoStateManager;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let mut config = TodoConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load todos configuration")?;

    logging::init(cli.verbose, cli.log_file.or_else(|| config.log_file.clone()));

    if cli.empty {
        config.session.seed = false;
    }
    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    let state = TodoStateManager::from_settings(&config.session);
    let mut ctx = SessionContext::new(state, config.display);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    run_session(&mut ctx, stdin.lock(), &mut stdout, interactive)
}
