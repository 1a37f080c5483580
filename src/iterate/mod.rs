//! Ordered, early-exiting traversal over collections.
//!
//! This module provides the primitives the rest of the crate is built from:
//!
//! - [`for_each`]: visit entries in order, stopping early on request
//! - [`for_each_right`]: the same over [`reverse_view`]
//! - [`reverse_view`]: a lazy reversed view of a collection's entries
//! - [`fold`], [`reduce`] and their right-to-left variants (see [`fold`](mod@fold))
//!
//! Iteration order is `0..n-1` for sequences and insertion order for
//! mappings and objects.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::iterate::for_each;
//! use lowbar::value;
//!
//! let mut seen = Vec::new();
//! for_each(&value!([1, 2, 3, 4]), |element, _, _| {
//!     seen.push(element.clone());
//!     seen.len() < 2
//! })
//! .unwrap();
//!
//! assert_eq!(seen, vec![value!(1), value!(2)]);
//! ```

use std::iter::Rev;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::value::{EntryIter, Key, Value};

pub mod fold;

pub use fold::{fold, fold_right, reduce, reduce_right, try_fold, try_fold_right, try_reduce_right};

/// What an iteration callback asks for after each entry.
///
/// - `()` always continues
/// - `bool`: `false` stops the iteration
/// - [`ControlFlow`]: `Break` stops the iteration
pub trait Step {
    /// Returns `true` when the iteration should go on.
    fn should_continue(self) -> bool;
}

impl Step for () {
    fn should_continue(self) -> bool {
        true
    }
}

impl Step for bool {
    fn should_continue(self) -> bool {
        self
    }
}

impl<B, C> Step for ControlFlow<B, C> {
    fn should_continue(self) -> bool {
        self.is_continue()
    }
}

/// Invokes `function(value, key, collection)` for each entry in order.
///
/// Stops as soon as the callback's [`Step`] says so. Returns `Ok(true)`
/// whenever the iteration ran, whether or not it stopped early.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::iterate::for_each;
/// use lowbar::{value, Value};
///
/// let collection = value!({"state": "IN", "city": "Indianapolis", "object": "School bus"});
/// let mut mapped = Vec::new();
/// for_each(&collection, |value, key, _| {
///     mapped.push((key.to_string(), value.clone()));
///     key.to_string() != "city"
/// })
/// .unwrap();
///
/// assert_eq!(mapped.len(), 2);
/// ```
pub fn for_each<F, R>(collection: &Value, function: F) -> Result<bool>
where
    F: FnMut(&Value, &Key, &Value) -> R,
    R: Step,
{
    let entries = collection.try_entries("for_each")?;
    Ok(visit(entries, collection, function))
}

/// Like [`for_each`], but from the last entry to the first.
///
/// Keys are the original keys, not positions in the reversed order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
pub fn for_each_right<F, R>(collection: &Value, function: F) -> Result<bool>
where
    F: FnMut(&Value, &Key, &Value) -> R,
    R: Step,
{
    let entries = reverse_view(collection)?;
    Ok(visit(entries, collection, function))
}

/// A lazy, read-only reversed traversal of a collection's entries.
///
/// No copy of the collection is made.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::iterate::reverse_view;
/// use lowbar::value;
///
/// let collection = value!(["a", "b", "c"]);
/// let keys: Vec<String> = reverse_view(&collection)
///     .unwrap()
///     .map(|(key, _)| key.to_string())
///     .collect();
/// assert_eq!(keys, vec!["2", "1", "0"]);
/// ```
pub fn reverse_view(collection: &Value) -> Result<Rev<EntryIter<'_>>> {
    collection
        .try_entries("for_each_right")
        .map(Iterator::rev)
}

fn visit<'a, I, F, R>(entries: I, collection: &Value, mut function: F) -> bool
where
    I: Iterator<Item = (std::borrow::Cow<'a, Key>, &'a Value)>,
    F: FnMut(&Value, &Key, &Value) -> R,
    R: Step,
{
    for (key, value) in entries {
        if !function(value, &key, collection).should_continue() {
            break;
        }
    }
    true
}
