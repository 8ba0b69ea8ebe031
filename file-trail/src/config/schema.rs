//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogLevel;
use crate::path::PathStyle;

/// Settings that shape how a trail validates paths and how loudly it logs.
///
/// The serialized replay log does not carry any of this; a trail hydrated
/// under a different configuration replays the same log with different
/// validation rules.
///
/// # Examples
///
/// ```
/// use file_trail::{PathStyle, TrailConfig};
///
/// let config = TrailConfig::from_yaml("path_style: posix\n").unwrap();
/// assert_eq!(config.path_style, PathStyle::Posix);
/// assert_eq!(config.log_level, None);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TrailConfig {
    /// Which absolute path forms `visit` accepts.
    #[serde(default)]
    pub path_style: PathStyle,

    /// Verbosity for the bundled stderr logger.
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl TrailConfig {
    /// Parses a configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// YAML is malformed or names an unknown field.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
