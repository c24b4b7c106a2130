//! Shared constants for CoreRank.

/// Default sliding window size for the graph of words.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default trade-off between core-rank and the cohesion penalty.
pub const DEFAULT_LAMBDA: f64 = 0.1;

/// Default number of keywords per document.
pub const DEFAULT_KEYWORDS: usize = 3;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "corerank.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CORERANK_LOG";

/// Default tracing filter when `CORERANK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "corerank=info";
