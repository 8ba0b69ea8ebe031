//! The visit-tracking state machine.
//!
//! A [`Trail`] consumes a stream of absolute paths and answers two questions
//! about it: has a path (or anything beneath it) been seen, and has the
//! stream moved on from a directory for good.

use std::collections::HashSet;
use std::str::FromStr;

use crate::config::TrailConfig;
use crate::error::{Error, Result};
use crate::format;
use crate::path::{ancestors, parent};

/// Tracks visited paths and completed directories across a stream of visits.
///
/// Every visited path is recorded together with all of its ancestors up to
/// the root. A directory counts as completed once a visit lands under a
/// different immediate parent than the visit before it.
///
/// The only persisted state is the ordered log of `visit` arguments;
/// everything else is rebuilt by replaying it (see [`crate::hydrate`]).
///
/// # Examples
///
/// ```
/// use file_trail::Trail;
///
/// let mut trail = Trail::new();
/// trail.visit("/a/2022/12/IMG_1.PNG").unwrap();
/// trail.visit("/a/2022/12/IMG_2.PNG").unwrap();
/// trail.visit("/a/2022/11/IMG_3.PNG").unwrap();
///
/// assert!(trail.has_visited("/a/2022"));
/// assert!(trail.has_visited("/"));
/// assert!(trail.has_completed("/a/2022/12"));
/// assert!(!trail.has_completed("/a/2022/11"));
/// assert_eq!(
///     trail.serialize(),
///     r#"ft@1.0.0:["/a/2022/12/IMG_1.PNG","/a/2022/12/IMG_2.PNG","/a/2022/11/IMG_3.PNG"]"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    config: TrailConfig,
    visited: HashSet<String>,
    completed: HashSet<String>,
    last_directory: Option<String>,
    log: Vec<String>,
}

impl Trail {
    /// Creates an empty trail with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trail that validates paths according to `config`.
    #[must_use]
    pub fn with_config(config: TrailConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration this trail validates with.
    #[must_use]
    pub const fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Records a visit to `path`.
    ///
    /// The path is appended to the replay log, the directory the previous
    /// visit happened in is marked completed if `path` lives elsewhere, and
    /// `path` plus all of its ancestors become visited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `path` is not absolute (or is an
    /// absolute form the configured [`PathStyle`](crate::PathStyle)
    /// excludes). The trail is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_trail::Trail;
    ///
    /// let mut trail = Trail::new();
    /// assert!(trail.visit("../x").is_err());
    /// assert!(trail.is_empty());
    ///
    /// trail.visit("/photos/IMG_1.PNG").unwrap();
    /// assert_eq!(trail.last_directory(), Some("/photos"));
    /// ```
    pub fn visit(&mut self, path: impl AsRef<str>) -> Result<()> {
        let path = path.as_ref();
        self.config.path_style.validate(path)?;

        self.log.push(path.to_owned());
        self.mark_completed(path);
        self.mark_visited(path);

        log::trace!("visited {path}");
        Ok(())
    }

    /// Visits each path in order, stopping at the first rejected one.
    ///
    /// Visits made before the failure remain recorded.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidInput`] raised by [`Trail::visit`].
    pub fn visit_all<I, P>(&mut self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for path in paths {
            self.visit(path)?;
        }
        Ok(())
    }

    /// Returns `true` if `path` was visited or is an ancestor of a visited
    /// path.
    ///
    /// Matching is by exact string; no normalization is applied.
    #[must_use]
    pub fn has_visited(&self, path: &str) -> bool {
        self.visited.contains(path)
    }

    /// Returns `true` if the trail has moved on from directory `path`.
    ///
    /// The directory of the most recent visit is never completed.
    #[must_use]
    pub fn has_completed(&self, path: &str) -> bool {
        self.completed.contains(path)
    }

    /// Encodes the replay log as versioned text.
    ///
    /// The result has the form `ft@1.0.0:<json array of paths>` and can be
    /// turned back into an equivalent trail with [`crate::hydrate`].
    #[must_use]
    pub fn serialize(&self) -> String {
        format::encode(&self.log)
    }

    /// Every path passed to `visit`, in call order, duplicates included.
    #[must_use]
    pub fn visit_log(&self) -> &[String] {
        &self.log
    }

    /// Number of recorded visits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns `true` if nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The parent directory of the most recent visit.
    #[must_use]
    pub fn last_directory(&self) -> Option<&str> {
        self.last_directory.as_deref()
    }

    /// Iterates over completed directories in no particular order.
    pub fn completed_directories(&self) -> impl Iterator<Item = &str> + '_ {
        self.completed.iter().map(String::as_str)
    }

    // Must run before last_directory is overwritten.
    fn mark_completed(&mut self, path: &str) {
        let dir = parent(path);
        if self.last_directory.as_deref() == Some(dir) {
            return;
        }
        if let Some(left) = self.last_directory.replace(dir.to_owned()) {
            log::debug!("left {left} for {dir}, marking it completed");
            self.completed.insert(left);
        }
    }

    fn mark_visited(&mut self, path: &str) {
        for ancestor in ancestors(path) {
            // Everything above an already visited path is visited too.
            if self.visited.contains(ancestor) {
                break;
            }
            self.visited.insert(ancestor.to_owned());
        }
    }
}

impl FromStr for Trail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        format::hydrate(s)
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
