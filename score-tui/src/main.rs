use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{bail, Context};
use clap::Parser;
use scoreboard::Scoreboard;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;

pub mod app;
pub mod config;
pub mod controls;
pub mod drive_log;
pub mod name_input;
pub mod popup;
pub mod view;

/// Terminal scoreboard for a football game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Home team name, requires --away
    #[arg(long)]
    home: Option<String>,
    /// Away team name, requires --home
    #[arg(long)]
    away: Option<String>,
    /// RON file with play bindings and the starting team
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "scoreboard.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut board = Scoreboard::new();
    match (cli.home.as_deref(), cli.away.as_deref()) {
        (Some(home), Some(away)) => board
            .set_team_names(home, away)
            .context("invalid team names")?,
        (None, None) => {}
        _ => bail!("--home and --away must be given together"),
    }
    tracing::info!(plays = config.plays.len(), "starting scoreboard");

    let terminal = ratatui::init();
    let result = App::new(board, config).run(terminal);
    ratatui::restore();
    result.context("terminal error")
}
