//! Parent and ancestor decomposition over path strings.
//!
//! These functions work on the text of a path and never consult the
//! filesystem. `.` and `..` segments are ordinary names here.

use std::iter::FusedIterator;

use super::style::AbsoluteForm;

/// Returns the parent directory of `path`.
///
/// Trailing separators are ignored, and a run of separators counts as one.
/// The root is its own parent, as is any relative path without a separator,
/// so repeated application always reaches a fixed point.
///
/// # Examples
///
/// ```
/// use file_trail::path::parent;
///
/// assert_eq!(parent("/a/b/c.png"), "/a/b");
/// assert_eq!(parent("/a/b/"), "/a");
/// assert_eq!(parent("/a"), "/");
/// assert_eq!(parent("/"), "/");
/// assert_eq!(parent(r"C:\a\b.png"), r"C:\a");
/// assert_eq!(parent(r"C:\a"), r"C:\");
/// ```
#[must_use]
pub fn parent(path: &str) -> &str {
    let form = AbsoluteForm::of(path);
    let root_len = form.map_or(0, AbsoluteForm::root_len);
    let is_sep = |byte: u8| form.unwrap_or(AbsoluteForm::Posix).is_separator(byte);
    let bytes = path.as_bytes();

    let mut end = bytes.len();
    while end > root_len && is_sep(bytes[end - 1]) {
        end -= 1;
    }

    match bytes[root_len..end].iter().rposition(|&b| is_sep(b)) {
        Some(offset) => {
            let mut cut = root_len + offset;
            while cut > root_len && is_sep(bytes[cut - 1]) {
                cut -= 1;
            }
            &path[..cut]
        }
        None if root_len > 0 => &path[..root_len],
        None => path,
    }
}

/// Returns an iterator over `path` and each of its ancestors.
///
/// The first item is `path` itself and the last is the root, which is
/// yielded exactly once.
///
/// # Examples
///
/// ```
/// use file_trail::path::ancestors;
///
/// let chain: Vec<_> = ancestors("/a/b/c.png").collect();
/// assert_eq!(chain, ["/a/b/c.png", "/a/b", "/a", "/"]);
/// ```
#[must_use]
pub fn ancestors(path: &str) -> Ancestors<'_> {
    Ancestors { next: Some(path) }
}

/// Iterator returned by [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        let up = parent(current);
        self.next = (up != current).then_some(up);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}
