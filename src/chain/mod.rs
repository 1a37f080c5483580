//! A fluent wrapper dispatching any operation of the crate by name.
//!
//! [`chain`] wraps a value; each [`Chain::call`] looks the operation up in a
//! table built once on first use, calls it with the current value as its
//! first argument and keeps the result as the new current value.
//! [`Chain::value`] consumes the wrapper and returns the final value.
//!
//! Names are the `snake_case` function names (`concat_deep`, `has_keys`)
//! or their `camelCase` spellings (`concatDeep`, `hasKeys`). The filtering
//! helper [`where_matches`](crate::helpers::where_matches) is registered as
//! `where`.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::chain::{chain, Argument};
//! use lowbar::value;
//!
//! let result = chain(value!([0, 1, 2, 3, null]))
//!     .call("compact", [])?
//!     .call("prepend", [Argument::value(4)])?
//!     .value();
//!
//! assert_eq!(result, value!([4, 1, 2, 3]));
//! # Ok::<(), lowbar::Error>(())
//! ```
//!
//! Callbacks are plain closures over `&[Value]`:
//!
//! ```rust
//! use lowbar::chain::{chain, Argument};
//! use lowbar::{value, Value};
//!
//! let total = chain(value!({"a": 1, "b": 2}))
//!     .call("reduce", [Argument::callback(|arguments: &[Value]| {
//!         Value::from(arguments[0].as_i64().unwrap_or(0) + arguments[1].as_i64().unwrap_or(0))
//!     })])?
//!     .value();
//!
//! assert_eq!(total, value!(3));
//! # Ok::<(), lowbar::Error>(())
//! ```

mod arguments;
mod table;

pub use arguments::{Argument, Callback};
pub use table::{dispatch, operations};

use crate::error::Result;
use crate::value::Value;

/// Wraps `value` for chained calls.
pub fn chain(value: impl Into<Value>) -> Chain {
    Chain::new(value)
}

/// The fluent wrapper; see the [module documentation](self).
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    value: Value,
}

impl Chain {
    /// Wraps `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Calls the operation `name` with the current value followed by
    /// `arguments`, keeping its result as the new current value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperation`](crate::Error::UnknownOperation)
    /// for a name missing from the table, and any error of the operation.
    pub fn call<I>(self, name: &str, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Argument>,
    {
        let arguments: Vec<Argument> = std::iter::once(Argument::Value(self.value))
            .chain(arguments)
            .collect();
        dispatch(name, &arguments).map(|value| Self { value })
    }

    /// Like [`Chain::call`] for operations taking only plain values.
    ///
    /// # Errors
    ///
    /// See [`Chain::call`].
    pub fn call_with<I>(self, name: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.call(name, values.into_iter().map(Argument::value))
    }

    /// The current value, without ending the chain.
    #[must_use]
    pub const fn peek(&self) -> &Value {
        &self.value
    }

    /// Ends the chain, returning the current value.
    #[must_use]
    pub fn value(self) -> Value {
        self.value
    }
}

impl From<Chain> for Value {
    fn from(chain: Chain) -> Self {
        chain.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_call_with_values() {
        let chained = chain(value!({"a": 1}))
            .call_with("set", [value!("b.c"), value!(2)])
            .unwrap()
            .call_with("get", ["b"])
            .unwrap();
        assert_eq!(chained.peek(), &value!({"c": 2}));
    }

    #[rstest]
    fn test_failed_call_reports_error() {
        let result = chain(value!(3)).call("compact", []);
        assert!(result.is_err());
    }
}
