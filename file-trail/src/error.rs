//! Error types for the file-trail library.
//!
//! A trail fails in exactly two ways at runtime: a caller hands `visit` a
//! relative path, or `hydrate` is given text that is not a replay log this
//! version wrote. The remaining variants belong to the configuration layer.

use thiserror::Error;

/// Result type alias for operations that may fail with a file-trail error.
///
/// # Examples
///
/// ```
/// use file_trail::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the file-trail library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path handed to `visit` was not absolute.
    ///
    /// The trail is left untouched when this is returned.
    #[error("invalid input path '{path}': {reason}")]
    InvalidInput {
        /// The rejected path, verbatim.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// Serialized trail text could not be hydrated.
    ///
    /// Covers a missing or mismatched version prefix and payloads that do not
    /// decode to an array of strings.
    #[error("invalid serialized trail: {reason}")]
    InvalidSerializedFormat {
        /// What was wrong with the input.
        reason: String,
    },

    /// A YAML configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error was caused by a non-absolute input path.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_trail::Trail;
    ///
    /// let mut trail = Trail::new();
    /// let err = trail.visit("file.txt").unwrap_err();
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if error was caused by unreadable serialized trail text.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_trail::hydrate;
    ///
    /// let err = hydrate("").unwrap_err();
    /// assert!(err.is_invalid_serialized_format());
    /// ```
    #[must_use]
    pub fn is_invalid_serialized_format(&self) -> bool {
        matches!(self, Self::InvalidSerializedFormat { .. })
    }
}
