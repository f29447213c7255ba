//! Editor-wide constants and default paths.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used in titles and log output.
pub const APP_NAME: &str = "PixEdiTer";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "pixedit";

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: usize = 24;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: usize = 24;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default step used by the color adjuster strips.
pub const DEFAULT_ADJUST_STEP: f64 = 0.1;

/// Smallest step the color adjuster accepts.
pub const MIN_ADJUST_STEP: f64 = 0.005;

/// Largest step the color adjuster accepts.
pub const MAX_ADJUST_STEP: f64 = 0.20;

/// The text drawn for one canvas pixel. Pixels are two columns wide so they
/// look roughly square in a terminal.
pub const FILLED_PIXEL: &str = "██";

/// Returns the per-user data directory, `$HOME/.pixedit`, falling back to
/// the working directory when no home is known.
fn resolve_data_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(|_| PathBuf::from("."), |home| PathBuf::from(home).join(".pixedit"))
}

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved data directory for this session.
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(resolve_data_dir)
}

/// Returns the default configuration file path.
pub fn default_config_file() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

/// Returns the default log file path.
pub fn default_log_file() -> PathBuf {
    data_dir().join("pixedit.log")
}
