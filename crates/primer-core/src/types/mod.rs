//! # Core Type Definitions
//!
//! The error type shared by the core and the binary.
//!
//! The prime predicate and the sequence generator are total and never
//! produce an error. `PrimerError` covers the edges that take outside input:
//! unit construction, configuration, scene files and request limits.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in Primer.
///
/// - No silent failures
/// - Use `Result<T, PrimerError>` for fallible operations
/// - The core never panics; all errors are recoverable
#[derive(Debug, Error, PartialEq)]
pub enum PrimerError {
    /// A request asked for more values than allowed.
    #[error("Requested count {requested} exceeds maximum {max}")]
    CountTooLarge {
        /// The count that was asked for.
        requested: usize,
        /// The configured upper bound.
        max: usize,
    },

    /// A physical quantity was non-finite or out of its meaningful range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
