//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// Both outputs are off unless a path is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file (tracing output), in addition to stderr
    pub file: Option<String>,
    /// JSONL conversation log
    pub conversation_log: Option<String>,
}
