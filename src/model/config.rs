use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, keyed by theme slot name (e.g. `done = "#1DB863"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub resync: ResyncPolicy,
}

/// What happens to open row edits when the task collection changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResyncPolicy {
    /// Rebuild every row from the collection; all open drafts are dropped.
    #[default]
    ResetAll,
    /// Rebuild rows but keep drafts of rows whose task still exists.
    KeepDrafts,
}

impl ResyncPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ResyncPolicy::ResetAll => "reset-all",
            ResyncPolicy::KeepDrafts => "keep-drafts",
        }
    }
}

impl fmt::Display for ResyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResyncPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset-all" => Ok(ResyncPolicy::ResetAll),
            "keep-drafts" => Ok(ResyncPolicy::KeepDrafts),
            other => Err(format!(
                "unknown resync policy '{}' (expected reset-all or keep-drafts)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for log files. Logging is off when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
