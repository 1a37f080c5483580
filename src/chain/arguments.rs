//! Dynamically typed arguments for chained operations.

use std::fmt;

use crate::error::{Error, Result};
use crate::path::Path;
use crate::value::{Key, ReferenceCounter, Value};

#[cfg(feature = "arc")]
type CallbackFunction = dyn Fn(&[Value]) -> Value + Send + Sync;

#[cfg(not(feature = "arc"))]
type CallbackFunction = dyn Fn(&[Value]) -> Value;

/// A shared callback passed to a chained operation.
///
/// Iteration callbacks are called with `[value, key, collection]`; fold
/// callbacks with `[accumulator, value, key, collection]`; `map_keys`
/// callbacks with `[key, value, collection]`; `group_by` callbacks with
/// `[value]`.
///
/// # Examples
///
/// ```rust
/// use lowbar::chain::Callback;
/// use lowbar::{value, Value};
///
/// let double = Callback::new(|arguments: &[Value]| {
///     Value::from(arguments[0].as_i64().unwrap_or(0) * 2)
/// });
/// assert_eq!(double.call(&[value!(21)]), value!(42));
/// ```
#[derive(Clone)]
pub struct Callback(ReferenceCounter<CallbackFunction>);

impl Callback {
    /// Wraps a closure.
    #[cfg(feature = "arc")]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(ReferenceCounter::new(function))
    }

    /// Wraps a closure.
    #[cfg(not(feature = "arc"))]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self(ReferenceCounter::new(function))
    }

    /// Calls the callback.
    #[must_use]
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.0)(arguments)
    }

    /// Calls the callback with `[value, key, collection]`.
    pub(crate) fn call_entry(&self, value: &Value, key: &Key, collection: &Value) -> Value {
        self.call(&[value.clone(), key.to_value(), collection.clone()])
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Callback(<function>)")
    }
}

/// One argument of a chained operation.
#[derive(Debug, Clone)]
pub enum Argument {
    /// A plain value.
    Value(Value),
    /// A callback.
    Callback(Callback),
}

impl Argument {
    /// A plain value argument.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// A callback argument.
    #[cfg(feature = "arc")]
    pub fn callback<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Callback(Callback::new(function))
    }

    /// A callback argument.
    #[cfg(not(feature = "arc"))]
    pub fn callback<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self::Callback(Callback::new(function))
    }

    /// Returns `true` for a callback, or for an opaque value wrapping a
    /// [`Callback`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::chain::{Argument, Callback};
    /// use lowbar::Value;
    ///
    /// let callback = Callback::new(|_: &[Value]| Value::Null);
    /// assert!(Argument::from(callback.clone()).is_function());
    /// assert!(Argument::value(Value::opaque(callback)).is_function());
    /// assert!(!Argument::value("strlen").is_function());
    /// ```
    #[must_use]
    pub fn is_function(&self) -> bool {
        match self {
            Self::Callback(_) => true,
            Self::Value(Value::Opaque(opaque)) => opaque.downcast_ref::<Callback>().is_some(),
            Self::Value(_) => false,
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Callback> for Argument {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

// =============================================================================
// Argument Access
// =============================================================================

/// The arguments of one dispatched call; position `0` is the chained value.
///
/// Accessors report a missing required argument as [`Error::Arity`] and an
/// argument of the wrong type as [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Arguments<'a> {
    operation: &'static str,
    arguments: &'a [Argument],
}

impl<'a> Arguments<'a> {
    pub(crate) const fn new(operation: &'static str, arguments: &'a [Argument]) -> Self {
        Self {
            operation,
            arguments,
        }
    }

    fn require(&self, position: usize) -> Result<&'a Argument> {
        self.arguments.get(position).ok_or(Error::Arity {
            operation: self.operation,
            expected: position + 1,
            found: self.arguments.len(),
        })
    }

    fn mistyped(&self, position: usize, expected: &str) -> Error {
        Error::invalid_argument(
            self.operation,
            format!("argument {position} must be {expected}"),
        )
    }

    pub(crate) fn value(&self, position: usize) -> Result<&'a Value> {
        match self.require(position)? {
            Argument::Value(value) => Ok(value),
            Argument::Callback(_) => Err(self.mistyped(position, "a value")),
        }
    }

    pub(crate) fn optional_value(&self, position: usize) -> Result<Option<&'a Value>> {
        if position >= self.arguments.len() {
            return Ok(None);
        }
        self.value(position).map(Some)
    }

    pub(crate) fn callback(&self, position: usize) -> Result<&'a Callback> {
        match self.require(position)? {
            Argument::Callback(callback) => Ok(callback),
            Argument::Value(_) => Err(self.mistyped(position, "a callback")),
        }
    }

    pub(crate) fn optional_callback(&self, position: usize) -> Result<Option<&'a Callback>> {
        match self.arguments.get(position) {
            None | Some(Argument::Value(Value::Null)) => Ok(None),
            Some(_) => self.callback(position).map(Some),
        }
    }

    pub(crate) fn is_callback(&self, position: usize) -> bool {
        matches!(self.arguments.get(position), Some(Argument::Callback(_)))
    }

    pub(crate) fn is_function(&self, position: usize) -> bool {
        self.arguments.get(position).is_some_and(Argument::is_function)
    }

    pub(crate) fn path(&self, position: usize) -> Result<Path> {
        Path::try_from(self.value(position)?)
    }

    pub(crate) fn integer(&self, position: usize) -> Result<i64> {
        self.value(position)?
            .as_i64()
            .ok_or_else(|| self.mistyped(position, "an integer"))
    }

    pub(crate) fn optional_integer(&self, position: usize) -> Result<Option<i64>> {
        match self.optional_value(position)? {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.integer(position).map(Some),
        }
    }

    pub(crate) fn count(&self, position: usize) -> Result<usize> {
        usize::try_from(self.integer(position)?)
            .map_err(|_| self.mistyped(position, "a non-negative integer"))
    }

    /// A non-negative integer, `default` when absent.
    pub(crate) fn count_or(&self, position: usize, default: usize) -> Result<usize> {
        self.optional_count(position)
            .map(|count| count.unwrap_or(default))
    }

    pub(crate) fn optional_count(&self, position: usize) -> Result<Option<usize>> {
        self.optional_integer(position)?
            .map(|count| {
                usize::try_from(count).map_err(|_| self.mistyped(position, "a non-negative integer"))
            })
            .transpose()
    }

    pub(crate) fn boolean_or(&self, position: usize, default: bool) -> Result<bool> {
        match self.optional_value(position)? {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(self.mistyped(position, "a boolean")),
        }
    }

    pub(crate) fn string(&self, position: usize) -> Result<&'a str> {
        self.value(position)?
            .as_str()
            .ok_or_else(|| self.mistyped(position, "a string"))
    }

    pub(crate) fn optional_string(&self, position: usize) -> Result<Option<&'a str>> {
        match self.optional_value(position)? {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.string(position).map(Some),
        }
    }

    /// Every value from `position` on.
    pub(crate) fn rest_values(&self, position: usize) -> Result<Vec<Value>> {
        (position..self.arguments.len())
            .map(|index| self.value(index).cloned())
            .collect()
    }

    /// A list of paths: a sequence of path values, or a single path value.
    pub(crate) fn paths(&self, position: usize) -> Result<Vec<Path>> {
        let paths = self.value(position)?;
        if paths.is_array_like() {
            return paths.values().map(Path::try_from).collect();
        }
        Path::try_from(paths).map(|path| vec![path])
    }
}
