//! # pixedit: terminal pixel art editor
//!
//! Opens or creates an image and hands the terminal to the editor until
//! the user quits.

mod args;

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use pixedit_canvas::{PixelGrid, codec};
use pixedit_common::config::EditorConfig;
use pixedit_common::constants;
use pixedit_input::Decoder;
use pixedit_tui::{App, TerminalGuard, terminal};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn initial_grid(cli: &Cli, config: &EditorConfig) -> anyhow::Result<PixelGrid> {
    let (width, height) = cli
        .size
        .map_or((config.width, config.height), |s| (s.width, s.height));
    match &cli.file {
        Some(path) if path.exists() => {
            codec::load(path).with_context(|| format!("cannot open {}", path.display()))
        }
        Some(path) => {
            tracing::info!(path = %path.display(), "file does not exist yet, starting empty");
            let mut grid = PixelGrid::new(width, height);
            grid.set_path(path.clone());
            Ok(grid)
        }
        None => Ok(PixelGrid::new(width, height)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = cli.log_file.clone().unwrap_or_else(constants::default_log_file);
    init_logging(&log_file)?;

    let config_path: PathBuf = cli.config.clone().unwrap_or_else(constants::default_config_file);
    let config = EditorConfig::load(&config_path)
        .with_context(|| format!("invalid configuration in {}", config_path.display()))?;
    let grid = initial_grid(&cli, &config)?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        "starting {}",
        constants::APP_NAME
    );

    let guard = TerminalGuard::enter().context("cannot set up the terminal")?;
    let size = terminal::size().context("cannot read the terminal size")?;
    let mut app = App::new(&config, grid, std::io::stdout(), size).with_live_size();
    let result = app.run(Decoder::new(std::io::stdin()));
    drop(guard);
    result.context("editor stopped")?;
    Ok(())
}
