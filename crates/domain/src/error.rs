//! Unified error types for the domain layer
//!
//! Provides a common error type used across all construction and registry
//! operations, so callers match on one enum instead of per-module errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., a builder was asked to produce an invalid enemy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An operation was called with an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No template is registered under the requested key
    #[error("Unknown template: {key}")]
    UnknownTemplate { key: String },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if health <= 0 {
    ///     return Err(DomainError::validation("Boss health must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an unknown template error for a registry miss
    pub fn unknown_template(key: impl Into<String>) -> Self {
        Self::UnknownTemplate { key: key.into() }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Theme {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "fire" => Ok(Self::Fire),
    ///             _ => Err(DomainError::parse(format!("Unknown theme: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
