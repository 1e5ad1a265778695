//! Centralized path definitions for receipt-points
//!
//! ```text
//! ~/.config/receipt-points/
//! └── config.toml               # Service configuration
//! ```

use std::path::PathBuf;

/// Global config directory name (under `~/.config/`)
const GLOBAL_DIR: &str = ".config/receipt-points";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Global configuration directory: `~/.config/receipt-points/`
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Default config file: `~/.config/receipt-points/config.toml`
#[must_use]
pub fn default_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
