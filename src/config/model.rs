//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the game works without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed. Unset means a different game every launch.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Screen appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Reveal the three flags one after another at the start of a round.
    #[serde(default = "default_true")]
    pub animate_flags: bool,
    /// Print country names under the flags before the round is answered.
    #[serde(default)]
    pub show_flag_names: bool,
    /// Width of each flag card in columns.
    #[serde(default = "default_flag_width")]
    pub flag_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animate_flags: true,
            show_flag_names: false,
            flag_width: default_flag_width(),
        }
    }
}

/// Diagnostic log settings. The log goes to a file since the terminal is
/// taken by the game screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_flag_width() -> u16 {
    18
}
fn default_log_dir() -> String {
    "~/.local/share/flagquiz/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
