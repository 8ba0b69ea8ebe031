//! Path handling for trails.
//!
//! Paths are plain strings. This module decides whether a string is an
//! absolute path a trail will accept, and decomposes it into its chain of
//! ancestors.
//!
//! # Absolute forms
//!
//! - **POSIX**: rooted at `/`, components separated by `/`.
//! - **Drive-letter**: rooted at `X:\` (or `X:/`), components separated by
//!   either `\` or `/`.
//!
//! Which forms are accepted is controlled by [`PathStyle`].
//!
//! # Examples
//!
//! ```
//! use file_trail::path::{ancestors, parent, PathStyle};
//!
//! assert!(PathStyle::Auto.validate("/photos/2022/IMG_1.PNG").is_ok());
//! assert!(PathStyle::Auto.validate("photos/IMG_1.PNG").is_err());
//!
//! assert_eq!(parent("/photos/2022/IMG_1.PNG"), "/photos/2022");
//! assert_eq!(ancestors("/photos/2022").last(), Some("/"));
//! ```

mod ancestry;
mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use ancestry::{ancestors, parent, Ancestors};
pub use style::{AbsoluteForm, PathStyle};
