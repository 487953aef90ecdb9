//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value type is the resource-owning trait object, which the cache
    /// refuses to hold
    #[error("Unsupported value type: {0}")]
    UnsupportedType(String),

    /// Key holds a value of a different type than requested
    #[error("Type mismatch for key: {0}")]
    TypeMismatch(String),

    /// Construction-time configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
