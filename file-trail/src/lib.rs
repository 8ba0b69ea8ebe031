#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # file-trail
//!
//! Bookkeeping for tools that stream absolute file paths: crawlers,
//! incremental indexers, migration scripts.
//!
//! A [`Trail`] remembers every path it was shown together with all of that
//! path's ancestors, and notices when the stream has left a directory behind
//! for good, without ever listing a directory or touching the disk.
//!
//! ## Core Types
//!
//! - [`Trail`]: the visit/query state machine
//! - [`hydrate`]: rebuilds a trail from [`Trail::serialize`] output
//! - [`TrailConfig`] and [`PathStyle`]: which absolute path forms are accepted
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: optional stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use file_trail::{hydrate, Trail};
//!
//! let mut trail = Trail::new();
//! trail.visit("/a/2022/12/IMG_1.PNG").unwrap();
//! trail.visit("/a/2022/12/IMG_2.PNG").unwrap();
//! trail.visit("/a/2022/11/IMG_3.PNG").unwrap();
//!
//! assert!(trail.has_visited("/a/2022"));
//! assert!(trail.has_completed("/a/2022/12"));
//! assert!(!trail.has_completed("/a/2022/11"));
//!
//! // Persist the replay log and pick up where we left off.
//! let saved = trail.serialize();
//! let resumed = hydrate(&saved).unwrap();
//! assert!(resumed.has_completed("/a/2022/12"));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod path;
pub mod trail;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, TrailConfig};
pub use error::{Error, Result};
pub use format::{hydrate, hydrate_with, SERIALIZATION_PREFIX};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathStyle;
pub use trail::Trail;
