//! Keys addressing entries of array-like and object-like values.

use std::fmt;

use crate::error::{Error, Result};

use super::Value;

/// A key inside a collection.
///
/// Sequences use implicit [`Key::Index`] keys `0..n-1`; mappings and objects
/// may mix [`Key::Index`] and [`Key::Name`] keys.
///
/// String segments that spell a canonical decimal integer are normalized to
/// [`Key::Index`], so `"0"` and `0` address the same entry.
///
/// # Examples
///
/// ```rust
/// use lowbar::Key;
///
/// assert_eq!(Key::parse("42"), Key::Index(42));
/// assert_eq!(Key::parse("-3"), Key::Index(-3));
/// assert_eq!(Key::parse("007"), Key::Name("007".to_string()));
/// assert_eq!(Key::parse("name"), Key::Name("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A positional or integer key.
    Index(i64),
    /// A named key.
    Name(String),
}

impl Key {
    /// Parses a single path segment, normalizing canonical integers.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        canonical_index(segment).map_or_else(|| Self::Name(segment.to_string()), Self::Index)
    }

    /// Returns the integer value of an [`Key::Index`] key.
    #[must_use]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns `true` for [`Key::Index`] keys.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Converts the key into a leaf value (`Int` or `Str`).
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Index(index) => Value::Int(*index),
            Self::Name(name) => Value::Str(name.clone()),
        }
    }
}

fn canonical_index(segment: &str) -> Option<i64> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == segment.len(),
        [first, ..] => *first != b'0' && digits.bytes().all(|byte| byte.is_ascii_digit()),
    };
    if canonical { segment.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(segment: &str) -> Self {
        Self::parse(segment)
    }
}

impl From<String> for Key {
    fn from(segment: String) -> Self {
        canonical_index(&segment).map_or(Self::Name(segment), Self::Index)
    }
}

impl From<&String> for Key {
    fn from(segment: &String) -> Self {
        Self::parse(segment)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl TryFrom<&Value> for Key {
    type Error = Error;

    /// Only integers and strings can be used as keys.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(index) => Ok(Self::Index(*index)),
            Value::Str(segment) => Ok(Self::parse(segment)),
            other => Err(Error::invalid_argument(
                "key",
                format!("{} cannot be used as a collection key", other.kind()),
            )),
        }
    }
}
