//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FILE_TRAIL_*` environment variables that
//! override values parsed from YAML.

use std::env;

use crate::config::schema::TrailConfig;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Environment variable selecting the accepted path style.
pub const PATH_STYLE_ENV: &str = "FILE_TRAIL_PATH_STYLE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use file_trail::config::{EnvironmentConfig, TrailConfig};
///
/// let mut config = TrailConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized value.
    pub fn apply_overrides(config: &mut TrailConfig) -> Result<()> {
        if let Ok(style) = env::var(PATH_STYLE_ENV) {
            config.path_style = style.parse().map_err(|_| Error::Validation {
                field: PATH_STYLE_ENV.into(),
                message: format!("Invalid path style: '{style}' (expected auto/posix/windows)"),
            })?;
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }
}
