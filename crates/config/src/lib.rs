pub mod schema;
pub mod watcher;

pub use schema::{
    DisplayConfig, FeedbackConfig, PickerConfig, SwatchConfig, ThemeConfig, WindowConfig,
};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use swatch_core::{Result, SwatchError};

/// Load configuration from a TOML file.  Returns `SwatchConfig::default()` if
/// the file doesn't exist so the picker always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<SwatchConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SwatchConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    let config: SwatchConfig =
        toml::from_str(&raw).map_err(|e| SwatchError::Config(format!("TOML parse error: {e}")))?;

    if let Err(e) = config.validate() {
        tracing::warn!("{e}; falling back to the default initial color");
    }

    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("swatch").join("swatch.toml")
}
