//! # lowbar
//!
//! Collection utilities over dynamically shaped values: dotted-path reads
//! and writes, merging, flattening, folds and a fluent chain wrapper.
//!
//! ## Overview
//!
//! Everything operates on [`Value`], a tagged value that is either a leaf
//! (null, boolean, number, string, opaque reference) or a container
//! (sequence, array-like mapping, object). Containers share their children
//! through reference counting, so every operation returns a new value and
//! leaves its inputs untouched while copying only what it changes.
//!
//! - **Iteration**: [`iterate::for_each`], [`iterate::reduce`] and their right-to-left variants
//! - **Paths**: [`path::get`], [`path::set`], [`path::has`] with auto-vivification on write
//! - **Combinators**: [`combinators::merge`], [`combinators::concat_deep`], [`combinators::ease`], ...
//! - **Helpers**: small array, collection, number and string utilities
//! - **Chain**: [`chain::chain`] dispatching any of the above by name
//!
//! ## Feature Flags
//!
//! - `path`: path resolution and writes
//! - `combinators`: structural combinators (implies `path`)
//! - `helpers`: array, collection, number and string helpers (implies `path`)
//! - `chain`: the fluent wrapper (implies `combinators` and `helpers`)
//! - `serde`: `Serialize` / `Deserialize` for [`Value`] and [`Key`]
//! - `arc`: thread-safe reference counting, making [`Value`] `Send + Sync`
//! - `fxhash` / `ahash`: faster hashers for mapping storage
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lowbar::prelude::*;
//!
//! let collection = value!({"foo": {"bar": "ter"}, "baz": ["b", "z"]});
//!
//! assert_eq!(get(&collection, "baz.1"), value!("z"));
//!
//! let updated = set(&collection, "foo.qux.0", value!(1)).unwrap();
//! assert_eq!(get(&updated, "foo.qux"), value!([1]));
//! assert!(!has(&collection, "foo.qux"));
//!
//! let flat = ease(&collection, ".").unwrap();
//! assert_eq!(flat, value!({"foo.bar": "ter", "baz.0": "b", "baz.1": "z"}));
//! assert_eq!(unease(&flat, ".").unwrap(), collection);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model and the most used operations.
///
/// # Usage
///
/// ```rust
/// use lowbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::iterate::{for_each, for_each_right, reduce, reduce_right};
    pub use crate::value;
    pub use crate::value::{ContainerKind, Key, Kind, Value};

    #[cfg(feature = "path")]
    pub use crate::path::{Path, get, get_or, has, has_keys, set};

    #[cfg(feature = "combinators")]
    pub use crate::combinators::{assign, concat, concat_deep, ease, merge, pick, unease};

    #[cfg(feature = "chain")]
    pub use crate::chain::{Argument, Chain, chain};
}

mod error;

pub mod iterate;
pub mod value;

#[cfg(feature = "path")]
pub mod path;

#[cfg(feature = "combinators")]
pub mod combinators;

#[cfg(feature = "helpers")]
pub mod helpers;

#[cfg(feature = "chain")]
pub mod chain;

pub use error::{Error, Result};
pub use value::{
    ContainerKind, Entries, EntryIter, Key, KeyHasher, Kind, Opaque, Value, is_array,
    is_collection, is_null, is_number, is_object, is_string,
};
