//! Error Types
//!
//! Failures around the wall itself; note placement has none.

use thiserror::Error;

/// Problems with a page-supplied wall configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid wall config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("font list is empty")]
    EmptyFonts,
    #[error("entrance animation list is empty")]
    EmptyEntranceAnimations,
    #[error("typewriter interval must be positive")]
    ZeroInterval,
    #[error("drift period must be positive")]
    ZeroDriftPeriod,
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}
