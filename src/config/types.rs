use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_BUTTON_LABEL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Logs go to stderr when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Counter view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Label rendered on the button line (default: "Click Me").
    #[serde(default = "default_button_label")]
    pub button_label: String,
    /// Echo each dispatched action type before rendering (default: false).
    #[serde(default)]
    pub echo_actions: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_button_label() -> String {
    DEFAULT_BUTTON_LABEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            button_label: default_button_label(),
            echo_actions: false,
        }
    }
}
