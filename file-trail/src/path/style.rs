//! Absolute-path recognition.
//!
//! Two absolute forms are understood: POSIX paths rooted at `/`, and
//! drive-letter paths such as `C:\photos` (either separator after the colon).
//! Everything else, including `~`, `./x` and drive-relative `C:x`, is relative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The absolute form a path was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsoluteForm {
    /// Rooted at `/`, separated by `/`.
    Posix,
    /// Rooted at `X:\` or `X:/`, separated by `\` or `/`.
    Drive,
}

impl AbsoluteForm {
    /// Determines the absolute form of `path`, or `None` if it is relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_trail::path::AbsoluteForm;
    ///
    /// assert_eq!(AbsoluteForm::of("/a/b"), Some(AbsoluteForm::Posix));
    /// assert_eq!(AbsoluteForm::of(r"C:\a"), Some(AbsoluteForm::Drive));
    /// assert_eq!(AbsoluteForm::of("./a"), None);
    /// ```
    #[must_use]
    pub fn of(path: &str) -> Option<Self> {
        let bytes = path.as_bytes();
        if bytes.first() == Some(&b'/') {
            Some(Self::Posix)
        } else if bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && is_drive_separator(bytes[2])
        {
            Some(Self::Drive)
        } else {
            None
        }
    }

    /// Length in bytes of the root prefix (`/` or `X:\`).
    #[must_use]
    pub const fn root_len(self) -> usize {
        match self {
            Self::Posix => 1,
            Self::Drive => 3,
        }
    }

    /// Whether `byte` separates components in this form.
    #[must_use]
    pub const fn is_separator(self, byte: u8) -> bool {
        match self {
            Self::Posix => byte == b'/',
            Self::Drive => is_drive_separator(byte),
        }
    }
}

const fn is_drive_separator(byte: u8) -> bool {
    byte == b'\\' || byte == b'/'
}

/// Which absolute forms a trail accepts.
///
/// # Examples
///
/// ```
/// use file_trail::PathStyle;
///
/// let style: PathStyle = "posix".parse().unwrap();
/// assert!(style.validate("/a/b").is_ok());
/// assert!(style.validate(r"C:\a\b").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Both POSIX and drive-letter paths.
    #[default]
    Auto,
    /// Only `/`-rooted paths.
    Posix,
    /// Only drive-letter paths.
    Windows,
}

impl PathStyle {
    /// Checks that `path` is absolute in a form this style accepts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for relative paths, and for absolute
    /// paths written in a form the style excludes.
    pub fn validate(self, path: &str) -> Result<AbsoluteForm> {
        let Some(form) = AbsoluteForm::of(path) else {
            return Err(Error::InvalidInput {
                path: path.to_string(),
                reason: "relative paths are not supported; supply an absolute path".to_string(),
            });
        };

        match (self, form) {
            (Self::Posix, AbsoluteForm::Drive) => Err(Error::InvalidInput {
                path: path.to_string(),
                reason: "drive-letter paths are not accepted with the posix path style"
                    .to_string(),
            }),
            (Self::Windows, AbsoluteForm::Posix) => Err(Error::InvalidInput {
                path: path.to_string(),
                reason: "paths must start with a drive letter with the windows path style"
                    .to_string(),
            }),
            _ => Ok(form),
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}
