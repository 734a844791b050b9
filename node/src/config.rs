//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use votechain_ledger::LedgerConfig;
use votechain_utils::LogFormat;

use crate::NodeError;

/// Configuration for a votechain node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Deadline for a single append's proof-of-work search, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_timeout_ms: Option<u64>,

    /// Candidates on the ballot. Empty accepts any candidate identifier.
    #[serde(default)]
    pub candidates: Vec<String>,

    /// Ledger settings.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Voter roster loaded into the registry at startup.
    #[serde(default)]
    pub voters: Vec<VoterEntry>,
}

/// One roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterEntry {
    pub id: String,
    pub name: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            append_timeout_ms: None,
            candidates: Vec::new(),
            ledger: LedgerConfig::default(),
            voters: Vec::new(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, NodeError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NodeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, NodeError> {
        toml::to_string_pretty(self).map_err(|e| NodeError::Config(e.to_string()))
    }

    pub fn append_timeout(&self) -> Option<Duration> {
        self.append_timeout_ms.map(Duration::from_millis)
    }
}
