//! Layered construction of a [`TrailConfig`].

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::TrailConfig;
use crate::error::Result;
use crate::logging::LogLevel;
use crate::path::PathStyle;

/// Builds a [`TrailConfig`] from YAML text, the environment and explicit
/// overrides.
///
/// Precedence, highest first: explicit overrides, `FILE_TRAIL_*` environment
/// variables, YAML text, built-in defaults.
///
/// # Examples
///
/// ```
/// use file_trail::config::ConfigBuilder;
/// use file_trail::PathStyle;
///
/// let config = ConfigBuilder::new()
///     .with_yaml("path_style: windows")
///     .with_path_style(PathStyle::Posix)
///     .skip_env()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.path_style, PathStyle::Posix);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    yaml: Option<String>,
    skip_env: bool,
    path_style: Option<PathStyle>,
    log_level: Option<LogLevel>,
}

impl ConfigBuilder {
    /// Creates a builder that starts from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `yaml` as the base layer.
    #[must_use]
    pub fn with_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.yaml = Some(yaml.into());
        self
    }

    /// Ignores `FILE_TRAIL_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Forces the path style regardless of other layers.
    #[must_use]
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = Some(style);
        self
    }

    /// Forces the log level regardless of other layers.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Resolves all layers into a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML layer does not parse or an environment
    /// variable holds an unrecognized value.
    pub fn build(self) -> Result<TrailConfig> {
        let mut config = match &self.yaml {
            Some(yaml) => TrailConfig::from_yaml(yaml)?,
            None => TrailConfig::default(),
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(style) = self.path_style {
            config.path_style = style;
        }
        if let Some(level) = self.log_level {
            config.log_level = Some(level);
        }

        log::debug!(
            "resolved trail config: path_style={}, log_level={:?}",
            config.path_style,
            config.log_level
        );

        Ok(config)
    }
}
