//! Versioned replay-log encoding.
//!
//! A serialized trail is `ft@<major>.<minor>.<patch>:` followed by a JSON
//! array holding every `visit` argument in call order. Derived state is
//! never written; hydration replays the log through [`Trail::visit`] so a
//! corrupt entry is caught by the same validation that guarded the original
//! call.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::config::TrailConfig;
use crate::error::{Error, Result};
use crate::trail::Trail;

/// Identifies the replay-log format.
pub const FORMAT_TAG: &str = "ft";

/// Schema version of the replay log.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Full prefix every serialized trail starts with.
pub const SERIALIZATION_PREFIX: &str = "ft@1.0.0:";

pub(crate) fn encode(visits: &[String]) -> String {
    format!("{SERIALIZATION_PREFIX}{}", Value::from(visits))
}

fn decode(serialized: &str) -> Result<Vec<String>> {
    let payload = serialized
        .strip_prefix(SERIALIZATION_PREFIX)
        .ok_or_else(|| prefix_error(serialized))?;

    if payload.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(payload).map_err(|e| Error::InvalidSerializedFormat {
        reason: format!("malformed payload: {e}"),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidSerializedFormat {
                reason: format!("payload must be an array of strings, found {}", kind(&other)),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(path) => Ok(path),
            other => Err(Error::InvalidSerializedFormat {
                reason: format!("entry {index} must be a string, found {}", kind(&other)),
            }),
        })
        .collect()
}

fn prefix_error(serialized: &str) -> Error {
    let tag = format!("{FORMAT_TAG}@");
    let reason = match serialized.strip_prefix(&tag) {
        Some(rest) => match rest.split_once(':') {
            Some((version, _)) => {
                format!("unsupported format version '{version}' (expected {FORMAT_VERSION})")
            }
            None => format!("truncated prefix (expected '{SERIALIZATION_PREFIX}')"),
        },
        None => format!("missing '{SERIALIZATION_PREFIX}' prefix"),
    };
    Error::InvalidSerializedFormat { reason }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Rebuilds a trail from the output of [`Trail::serialize`].
///
/// The result answers `has_visited` and `has_completed` exactly like the
/// trail that produced `serialized`.
///
/// # Errors
///
/// - [`Error::InvalidSerializedFormat`] if the version prefix is missing or
///   different, or the payload is not a JSON array of strings.
/// - [`Error::InvalidInput`] if a logged path is not absolute.
///
/// # Examples
///
/// ```
/// use file_trail::{hydrate, Trail};
///
/// let mut trail = Trail::new();
/// trail.visit("/a/2022/12/IMG_1.PNG").unwrap();
/// trail.visit("/a/2022/11/IMG_2.PNG").unwrap();
///
/// let restored = hydrate(&trail.serialize()).unwrap();
/// assert!(restored.has_completed("/a/2022/12"));
/// assert_eq!(restored, trail);
///
/// assert!(hydrate("ft@1.0.0:").unwrap().is_empty());
/// assert!(hydrate("").is_err());
/// ```
pub fn hydrate(serialized: &str) -> Result<Trail> {
    hydrate_with(serialized, TrailConfig::default())
}

/// Like [`hydrate`], but replays the log under `config`.
///
/// # Errors
///
/// Same as [`hydrate`]; additionally any logged path the configured path
/// style excludes fails with [`Error::InvalidInput`].
pub fn hydrate_with(serialized: &str, config: TrailConfig) -> Result<Trail> {
    let visits = decode(serialized)?;
    let mut trail = Trail::with_config(config);
    trail.visit_all(&visits)?;
    log::debug!("hydrated trail from {} logged visits", trail.len());
    Ok(trail)
}

impl Serialize for Trail {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(self.visit_log()))
    }
}

impl<'de> Deserialize<'de> for Trail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let serialized = String::deserialize(deserializer)?;
        hydrate(&serialized).map_err(D::Error::custom)
    }
}
