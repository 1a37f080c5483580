//! Dotted-path addressing into nested collections.
//!
//! A [`Path`] is a sequence of [`Key`] segments, usually obtained by splitting
//! a string on `.`. The distinguished *whole* path addresses the collection
//! itself.
//!
//! - Reading: [`lookup`], [`get`], [`get_or`], [`get_or_else`], [`has`], [`has_keys`]
//! - Writing: [`universal_set`], [`set`]
//!
//! Writes never mutate their input. They return a new value that shares
//! every child off the written path with the original.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::path::{get, get_or, has, set};
//! use lowbar::value;
//!
//! let original = value!({"foo": {"bar": "ter"}});
//! let updated = set(&original, "foo.baz.ber", value!("fer")).unwrap();
//!
//! assert_eq!(get(&updated, "foo.baz"), value!({"ber": "fer"}));
//! assert_eq!(get_or(&original, "foo.baz", value!("default")), value!("default"));
//! assert!(has(&updated, "foo.bar"));
//! assert_eq!(original, value!({"foo": {"bar": "ter"}}));
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::value::{Key, Value};

mod resolve;
mod write;

pub use resolve::{get, get_or, get_or_else, has, has_keys, lookup};
pub use write::{set, universal_set};

pub(crate) use write::set_owned;

/// The separator between path segments.
pub const SEPARATOR: char = '.';

/// A path into a nested collection.
///
/// Most paths are built implicitly through `From` conversions: string paths
/// are split on `.`, integers address a single index, and `None` is the
/// whole-value marker.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::Path;
/// use lowbar::Key;
///
/// let path = Path::from("baz.0");
/// assert_eq!(path.segments(), &[Key::parse("baz"), Key::Index(0)]);
/// assert_eq!(path.raw(), Some("baz.0"));
///
/// assert!(Path::from(None::<&str>).is_whole());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    raw: Option<String>,
    segments: SmallVec<[Key; 4]>,
}

impl Path {
    /// The whole-value marker.
    #[must_use]
    pub fn whole() -> Self {
        Self::default()
    }

    /// Splits a dotted path into segments.
    ///
    /// The empty string is a single empty-named segment, not the whole marker.
    #[must_use]
    pub fn split(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            segments: raw.split(SEPARATOR).map(Key::parse).collect(),
        }
    }

    /// Returns `true` for the whole-value marker.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.raw.is_none()
    }

    /// The unsplit path text, `None` for the whole marker.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The unsplit path text read as a single key.
    #[must_use]
    pub fn raw_key(&self) -> Option<Key> {
        self.raw.as_deref().map(Key::parse)
    }

    /// The path segments; empty for the whole marker.
    #[must_use]
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => formatter.write_str(raw),
            None => formatter.write_str("<whole>"),
        }
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self {
            raw: Some(key.to_string()),
            segments: SmallVec::from_elem(key, 1),
        }
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::split(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self::split(&raw)
    }
}

impl From<&String> for Path {
    fn from(raw: &String) -> Self {
        Self::split(raw)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<i64> for Path {
    fn from(index: i64) -> Self {
        Self::from(Key::Index(index))
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        Self::from(Key::from(index))
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Self::from(Key::from(index))
    }
}

impl From<Option<&str>> for Path {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::whole, Self::split)
    }
}

impl TryFrom<&Value> for Path {
    type Error = Error;

    /// `Null` is the whole marker; strings are split; integers address one index.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::whole()),
            Value::Str(raw) => Ok(Self::split(raw)),
            Value::Int(index) => Ok(Self::from(*index)),
            other => Err(Error::invalid_argument(
                "path",
                format!("{} cannot be used as a path", other.kind()),
            )),
        }
    }
}
