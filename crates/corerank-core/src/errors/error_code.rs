//! CorerankErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// for diagnostics and process exit handling.
pub trait CorerankErrorCode {
    /// Returns the error code string (e.g., "EMPTY_HEAP").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_HEAP: &str = "EMPTY_HEAP";
pub const INVALID_KEY: &str = "INVALID_KEY";
pub const HEAP_ERROR: &str = "HEAP_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const NO_POSITIVE_GAIN: &str = "NO_POSITIVE_GAIN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
