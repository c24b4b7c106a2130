//! Configuration system for CoreRank.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod corerank_config;
pub mod extraction_config;

pub use corerank_config::{CliOverrides, CorerankConfig};
pub use extraction_config::{ExtractionConfig, ExtractionParams, ShortfallPolicy};
