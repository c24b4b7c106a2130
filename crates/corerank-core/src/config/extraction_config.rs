//! Extraction configuration: window size, lambda, keyword count, shortfall policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KEYWORDS, DEFAULT_LAMBDA, DEFAULT_WINDOW_SIZE};
use crate::errors::ConfigError;

/// What the document pipeline does when a line cannot yield the requested
/// number of keywords because no remaining word has positive gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortfallPolicy {
    /// Stop processing and surface the error.
    #[default]
    Abort,
    /// Drop the line from the output.
    Skip,
    /// Emit the keywords chosen before the shortfall.
    Partial,
}

impl ShortfallPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for ShortfallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShortfallPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            "partial" => Ok(Self::Partial),
            other => Err(ConfigError::InvalidValue {
                field: "extraction.on_shortfall".to_string(),
                message: format!("expected abort, skip or partial, got '{other}'"),
            }),
        }
    }
}

/// Configuration for keyword extraction. Unset fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Sliding window size for the graph of words. Default: 3.
    pub window_size: Option<usize>,
    /// Trade-off between core-rank and the cohesion penalty. Default: 0.1.
    pub lambda: Option<f64>,
    /// Number of keywords to extract per document. Default: 3.
    pub keywords: Option<usize>,
    /// Behaviour when fewer than `keywords` words have positive gain. Default: abort.
    pub on_shortfall: Option<ShortfallPolicy>,
}

impl ExtractionConfig {
    /// Returns the effective window size, defaulting to 3.
    pub fn effective_window_size(&self) -> usize {
        self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }

    /// Returns the effective lambda, defaulting to 0.1.
    pub fn effective_lambda(&self) -> f64 {
        self.lambda.unwrap_or(DEFAULT_LAMBDA)
    }

    /// Returns the effective keyword count, defaulting to 3.
    pub fn effective_keywords(&self) -> usize {
        self.keywords.unwrap_or(DEFAULT_KEYWORDS)
    }

    /// Returns the effective shortfall policy, defaulting to abort.
    pub fn effective_on_shortfall(&self) -> ShortfallPolicy {
        self.on_shortfall.unwrap_or_default()
    }

    /// Resolve into concrete parameters for the per-document pipeline.
    pub fn resolve(&self) -> ExtractionParams {
        ExtractionParams {
            window_size: self.effective_window_size(),
            lambda: self.effective_lambda(),
            keywords: self.effective_keywords(),
            on_shortfall: self.effective_on_shortfall(),
        }
    }
}

/// Fully resolved extraction parameters, passed explicitly into every
/// per-document call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionParams {
    pub window_size: usize,
    pub lambda: f64,
    pub keywords: usize,
    pub on_shortfall: ShortfallPolicy,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        ExtractionConfig::default().resolve()
    }
}
