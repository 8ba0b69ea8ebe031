//! Configuration for trails.
//!
//! A [`TrailConfig`] can come from several layers, merged with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_*`)
//! 2. Environment variables (`FILE_TRAIL_PATH_STYLE`, `FILE_TRAIL_LOG_MODE`)
//! 3. YAML text supplied by the caller
//! 4. Built-in defaults
//!
//! The library never reads configuration files itself; callers hand over
//! the YAML text.
//!
//! # Examples
//!
//! ```
//! use file_trail::config::ConfigBuilder;
//! use file_trail::{PathStyle, Trail};
//!
//! let config = ConfigBuilder::new()
//!     .with_yaml("path_style: posix")
//!     .skip_env()
//!     .build()
//!     .unwrap();
//!
//! let mut trail = Trail::with_config(config);
//! assert!(trail.visit(r"C:\photos\IMG_1.PNG").is_err());
//! assert!(trail.visit("/photos/IMG_1.PNG").is_ok());
//! ```

pub mod builder;
pub mod environment;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use schema::TrailConfig;
