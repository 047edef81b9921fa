//! Error types for the typeahead widget.
//!
//! This module defines the centralized error type [`TypeaheadError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for typeahead operations.
///
/// The error surface is deliberately small: every event sequence a user can
/// produce is a valid transition, so the variants here cover construction-time
/// validation, host-integration mistakes, and I/O from the ambient layers
/// (theme loading, trace export).
///
/// # Examples
///
/// ```
/// use typeahead::TypeaheadError;
///
/// let err = TypeaheadError::StaleIndex { index: 3, len: 2 };
/// assert_eq!(
///     err.to_string(),
///     "Stale suggestion index 3 (visible suggestions: 2)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TypeaheadError {
    /// Construction input was invalid.
    ///
    /// Occurs when the widget is built from malformed configuration, most
    /// notably a candidate list containing duplicate entries. The string
    /// describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host binding referenced a suggestion index that is not visible.
    ///
    /// Selecting or focusing an index at or beyond the current match list
    /// length indicates the binding rendered stale indices. This is an
    /// integration error and is reported rather than silently ignored.
    #[error("Stale suggestion index {index} (visible suggestions: {len})")]
    StaleIndex {
        /// Index the host supplied.
        index: usize,
        /// Length of the match list at the time of the event.
        len: usize,
    },

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content cannot be
    /// parsed. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for typeahead operations.
///
/// This is a type alias for `std::result::Result<T, TypeaheadError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TypeaheadError>;
