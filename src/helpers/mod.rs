//! Small single-purpose helpers over arrays, collections, numbers and strings.
//!
//! These are independent of each other and of the combinators; the chain
//! wrapper dispatches to them by name like to every other operation.
//!
//! - [`arrays`]: `append`, `prepend`, `compact`, `flatten`, `chunk`, `range`, ...
//! - [`collections`]: `filter`, `map`, `every`, `pluck`, `where_matches`, `group_by`, ...
//! - [`numbers`]: `average`, `min`, `max`
//! - [`strings`]: `split` and case conversion
//! - [`text`]: `slug`, `urlify`, `truncate`, `is_email`
//! - [`utilities`]: `identity`, `now`

pub mod arrays;
pub mod collections;
pub mod numbers;
pub mod strings;
pub mod text;
pub mod utilities;

pub use arrays::*;
pub use collections::*;
pub use numbers::*;
pub use strings::*;
pub use text::*;
pub use utilities::*;
