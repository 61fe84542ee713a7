//! Tic-Tac-Toe - console and terminal UI front ends.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_console::{
    Cli, Command, ConsoleSession, Settings, SettingsSource, env_filter, report_settings, tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (mut settings, source) = Settings::load(&cli.config)?;
    if cli.no_banners {
        settings = settings.with_banners(false);
    }

    match cli.command.unwrap_or_default() {
        Command::Console => run_console(&settings, &source),
        Command::Tui => run_tui(&settings, &source),
    }
}

/// Run the line-based game on stdin/stdout.
fn run_console(settings: &Settings, source: &SettingsSource) -> Result<()> {
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(io::stderr)
        .init();
    report_settings(settings, source);

    info!("Starting console game");
    let summary = ConsoleSession::new(io::stdin().lock(), io::stdout().lock(), settings).run()?;
    info!(?summary, "Console game finished");
    Ok(())
}

/// Run the full-screen TUI.
#[instrument(skip_all)]
fn run_tui(settings: &Settings, source: &SettingsSource) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    report_settings(settings, source);

    let summary = tui::run(settings)?;
    info!(?summary, "TUI session finished");
    Ok(())
}
