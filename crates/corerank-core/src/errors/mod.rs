//! Error handling for CoreRank.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod heap_error;
pub mod pipeline_error;
pub mod selection_error;

pub use config_error::ConfigError;
pub use error_code::CorerankErrorCode;
pub use graph_error::GraphError;
pub use heap_error::HeapError;
pub use pipeline_error::PipelineError;
pub use selection_error::SelectionError;
