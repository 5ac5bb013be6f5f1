//! Error types for the JSON bridge.

use thiserror::Error;

/// Errors raised while converting to or from JSON text.
///
/// Serde errors are flattened into their messages so the enum stays
/// comparable in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input text is not well-formed JSON.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// The value has no JSON representation (e.g. a map with non-string keys).
    #[error("JSON serialize error: {0}")]
    Serialize(String),

    /// The attached prototype does not define the requested operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
