//! The operation table behind [`Chain::call`](super::Chain::call).
//!
//! Every adapter reads its arguments through [`Arguments`], calls the typed
//! function it wraps and converts the result back into a [`Value`]. The
//! table is built on first use and registers each operation under its
//! `snake_case` name and its `camelCase` spelling.

use std::collections::HashMap;
use std::sync::LazyLock;

use heck::ToLowerCamelCase;

use crate::combinators::{DEFAULT_GLUE, assign, concat, concat_deep, ease, merge, pick, unease};
use crate::error::{Error, Result};
use crate::helpers::{
    DEFAULT_TRUNCATE_LIMIT, SlugOptions, append, average, camel_case, capitalize, chunk, compact,
    contains, drop, every, filter, first, flatten, group_by, group_by_paths, initial,
    intersection, intersects, is_email, is_empty, kebab_case, last, lower_case, lower_first, map,
    map_keys, map_values, max, min, now, patch, pluck, prepend, random, randomize, range, repeat,
    rest, search, size, slug, snake_case, split, start_case, string_contains, truncate,
    upper_case, upper_first, urlify, where_matches, words,
};
use crate::iterate::{for_each, for_each_right, reduce, reduce_right};
use crate::path::{Path, get_or, has, has_keys, set};
use crate::value::{Value, is_array, is_collection, is_null, is_number, is_object, is_string};

use super::arguments::{Argument, Arguments};

type Handler = fn(&Arguments<'_>) -> Result<Value>;

#[derive(Clone, Copy)]
struct Operation {
    name: &'static str,
    handler: Handler,
}

fn register(table: &mut HashMap<String, Operation>, name: &'static str, handler: Handler) {
    let operation = Operation { name, handler };
    let alias = name.to_lower_camel_case();
    if alias != name {
        table.insert(alias, operation);
    }
    table.insert(name.to_string(), operation);
}

/// Declares chain adapters and the table that holds them.
///
/// Each `"name" => handler(arguments) { body }` entry becomes a function
/// `dispatch_handler(arguments: &Arguments) -> Result<Value>` registered
/// under `name`.
macro_rules! operations {
    ($($name:literal => $handler:ident($arguments:ident) $body:block)*) => {
        paste::paste! {
            $(
                fn [<dispatch_ $handler>]($arguments: &Arguments<'_>) -> Result<Value> $body
            )*

            static OPERATIONS: LazyLock<HashMap<String, Operation>> = LazyLock::new(|| {
                let mut table = HashMap::new();
                $(
                    register(&mut table, $name, [<dispatch_ $handler>]);
                )*
                table
            });
        }
    };
}

/// Calls the operation registered under `name`.
///
/// `arguments[0]` is the value the operation applies to.
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`] for a name missing from the table,
/// [`Error::Arity`] for missing arguments, and whatever the operation itself
/// reports.
///
/// # Examples
///
/// ```rust
/// use lowbar::chain::{dispatch, Argument};
/// use lowbar::value;
///
/// let arguments = [Argument::value(value!({"a": {"b": 1}})), Argument::value("a.b")];
/// assert_eq!(dispatch("get", &arguments).unwrap(), value!(1));
/// assert!(dispatch("explode", &arguments).is_err());
/// ```
pub fn dispatch(name: &str, arguments: &[Argument]) -> Result<Value> {
    let operation = OPERATIONS
        .get(name)
        .ok_or_else(|| Error::UnknownOperation(name.to_string()))?;
    tracing::trace!(
        operation = operation.name,
        requested = name,
        arguments = arguments.len(),
        "dispatching chained operation"
    );
    (operation.handler)(&Arguments::new(operation.name, arguments))
}

/// The `snake_case` names of every chainable operation, sorted.
#[must_use]
pub fn operations() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = OPERATIONS.values().map(|operation| operation.name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn slug_options(options: Option<&Value>) -> Result<SlugOptions> {
    let mut parsed = SlugOptions::default();
    let Some(options) = options.filter(|options| !options.is_null()) else {
        return Ok(parsed);
    };
    for (key, value) in options.try_entries("slug")? {
        match (key.to_string().as_str(), value) {
            ("delimiter", Value::Str(delimiter)) => parsed.delimiter.clone_from(delimiter),
            ("limit", Value::Null) => parsed.limit = None,
            ("limit", Value::Int(limit)) => parsed.limit = usize::try_from(*limit).ok(),
            ("lowercase", Value::Bool(flag)) => parsed.lowercase = *flag,
            ("transliterate", Value::Bool(flag)) => parsed.transliterate = *flag,
            ("replacements", replacements) => {
                for (pattern, replacement) in replacements.try_entries("slug")? {
                    let replacement = replacement.as_str().ok_or_else(|| {
                        Error::invalid_argument("slug", "replacements must be strings")
                    })?;
                    parsed = parsed.with_replacement(&pattern.to_string(), replacement)?;
                }
            }
            (option, value) => {
                return Err(Error::invalid_argument(
                    "slug",
                    format!("unsupported option `{option}` with value {value}"),
                ));
            }
        }
    }
    Ok(parsed)
}

// =============================================================================
// Adapters
// =============================================================================

operations! {
    // Iteration and folds

    "do_for_each" => do_for_each(arguments) {
        let collection = arguments.value(0)?;
        let callback = arguments.callback(1)?;
        for_each(collection, |value, key, collection| {
            callback.call_entry(value, key, collection) != Value::Bool(false)
        })
        .map(Value::Bool)
    }

    "do_for_each_right" => do_for_each_right(arguments) {
        let collection = arguments.value(0)?;
        let callback = arguments.callback(1)?;
        for_each_right(collection, |value, key, collection| {
            callback.call_entry(value, key, collection) != Value::Bool(false)
        })
        .map(Value::Bool)
    }

    "reduce" => reduce(arguments) {
        let callback = arguments.callback(1)?;
        let seed = arguments.optional_value(2)?.cloned();
        reduce(
            arguments.value(0)?,
            |accumulator, value, key, collection| {
                callback.call(&[accumulator, value.clone(), key.to_value(), collection.clone()])
            },
            seed,
        )
    }

    "reduce_right" => reduce_right(arguments) {
        let callback = arguments.callback(1)?;
        let seed = arguments.optional_value(2)?.cloned();
        reduce_right(
            arguments.value(0)?,
            |accumulator, value, key, collection| {
                callback.call(&[accumulator, value.clone(), key.to_value(), collection.clone()])
            },
            seed,
        )
    }

    // Paths

    "get" => get(arguments) {
        let default = arguments.optional_value(2)?.cloned().unwrap_or_default();
        Ok(get_or(arguments.value(0)?, arguments.path(1)?, default))
    }

    "set" => set(arguments) {
        set(arguments.value(0)?, arguments.path(1)?, arguments.value(2)?.clone())
    }

    "has" => has(arguments) {
        Ok(Value::Bool(has(arguments.value(0)?, arguments.path(1)?)))
    }

    "has_keys" => has_keys(arguments) {
        let strict = arguments.boolean_or(2, false)?;
        Ok(Value::Bool(has_keys(arguments.value(0)?, arguments.paths(1)?, strict)))
    }

    // Combinators

    "pick" => pick(arguments) {
        pick(arguments.value(0)?, arguments.paths(1)?, arguments.optional_value(2)?.cloned())
    }

    "ease" => ease(arguments) {
        ease(arguments.value(0)?, arguments.optional_string(1)?.unwrap_or(DEFAULT_GLUE))
    }

    "unease" => unease(arguments) {
        unease(arguments.value(0)?, arguments.optional_string(1)?.unwrap_or(DEFAULT_GLUE))
    }

    "assign" => assign(arguments) {
        assign(&arguments.rest_values(0)?)
    }

    "merge" => merge(arguments) {
        merge(&arguments.rest_values(0)?)
    }

    "concat" => concat(arguments) {
        concat(&arguments.rest_values(0)?)
    }

    "concat_deep" => concat_deep(arguments) {
        concat_deep(&arguments.rest_values(0)?)
    }

    // Arrays

    "append" => append(arguments) {
        append(arguments.value(0)?, arguments.value(1)?.clone())
    }

    "prepend" => prepend(arguments) {
        prepend(arguments.value(0)?, arguments.value(1)?.clone())
    }

    "compact" => compact(arguments) {
        compact(arguments.value(0)?)
    }

    "flatten" => flatten(arguments) {
        flatten(arguments.value(0)?, arguments.boolean_or(1, false)?)
    }

    "patch" => patch(arguments) {
        patch(arguments.value(0)?, arguments.value(1)?)
    }

    "range" => range(arguments) {
        let step = arguments.optional_integer(2)?.unwrap_or(1);
        range(arguments.integer(0)?, arguments.optional_integer(1)?, step)
    }

    "repeat" => repeat(arguments) {
        Ok(repeat(arguments.value(0)?, arguments.count(1)?))
    }

    "chunk" => chunk(arguments) {
        chunk(arguments.value(0)?, arguments.count(1)?, arguments.boolean_or(2, false)?)
    }

    "drop" => drop(arguments) {
        drop(arguments.value(0)?, arguments.count_or(1, 1)?)
    }

    "randomize" => randomize(arguments) {
        randomize(arguments.value(0)?)
    }

    "random" => random(arguments) {
        random(arguments.value(0)?)
    }

    "search" => search(arguments) {
        let found = search(arguments.value(0)?, arguments.value(1)?)?;
        Ok(found.map_or(Value::Null, |key| key.to_value()))
    }

    "contains" => contains(arguments) {
        contains(arguments.value(0)?, arguments.value(1)?).map(Value::Bool)
    }

    "intersection" => intersection(arguments) {
        intersection(arguments.value(0)?, arguments.value(1)?)
    }

    "intersects" => intersects(arguments) {
        intersects(arguments.value(0)?, arguments.value(1)?).map(Value::Bool)
    }

    "first" => first(arguments) {
        first(arguments.value(0)?, arguments.optional_count(1)?)
    }

    "last" => last(arguments) {
        last(arguments.value(0)?, arguments.optional_count(1)?)
    }

    "rest" => rest(arguments) {
        rest(arguments.value(0)?, arguments.count_or(1, 1)?)
    }

    "initial" => initial(arguments) {
        initial(arguments.value(0)?, arguments.count_or(1, 1)?)
    }

    // Collections

    "filter" => filter(arguments) {
        let collection = arguments.value(0)?;
        match arguments.optional_callback(1)? {
            Some(callback) => filter(collection, |value, key, collection| {
                callback.call_entry(value, key, collection).is_truthy()
            }),
            None => compact(collection),
        }
    }

    "map" => map(arguments) {
        let callback = arguments.callback(1)?;
        map(arguments.value(0)?, |value, key, collection| {
            callback.call_entry(value, key, collection)
        })
    }

    "map_values" => map_values(arguments) {
        let callback = arguments.callback(1)?;
        map_values(arguments.value(0)?, |value, key, collection| {
            callback.call_entry(value, key, collection)
        })
    }

    "map_keys" => map_keys(arguments) {
        let callback = arguments.callback(1)?;
        map_keys(arguments.value(0)?, |key, value, collection| {
            callback.call(&[key.to_value(), value.clone(), collection.clone()])
        })
    }

    "every" => every(arguments) {
        let callback = arguments.callback(1)?;
        every(arguments.value(0)?, |value, key, collection| {
            callback.call_entry(value, key, collection).is_truthy()
        })
        .map(Value::Bool)
    }

    "pluck" => pluck(arguments) {
        pluck(arguments.value(0)?, arguments.path(1)?)
    }

    "where" => where_matches(arguments) {
        where_matches(arguments.value(0)?, arguments.value(1)?, arguments.boolean_or(2, false)?)
    }

    "group_by" => group_by(arguments) {
        let collection = arguments.value(0)?;
        if arguments.is_callback(1) {
            let callback = arguments.callback(1)?;
            return group_by(collection, |value| callback.call(std::slice::from_ref(value)));
        }
        arguments.value(1)?;
        let paths = arguments
            .rest_values(1)?
            .iter()
            .map(Path::try_from)
            .collect::<Result<Vec<_>>>()?;
        group_by_paths(collection, &paths)
    }

    "is_empty" => is_empty(arguments) {
        Ok(Value::Bool(is_empty(arguments.value(0)?)))
    }

    "size" => size(arguments) {
        size(arguments.value(0)?).map(Value::from)
    }

    // Numbers

    "average" => average(arguments) {
        Ok(average(arguments.value(0)?)?.map_or(Value::Null, Value::Float))
    }

    "min" => min(arguments) {
        min(arguments.value(0)?)
    }

    "max" => max(arguments) {
        max(arguments.value(0)?)
    }

    // Predicates

    "is_array" => is_array(arguments) {
        Ok(Value::Bool(is_array(arguments.value(0)?)))
    }

    "is_object" => is_object(arguments) {
        Ok(Value::Bool(is_object(arguments.value(0)?)))
    }

    "is_collection" => is_collection(arguments) {
        Ok(Value::Bool(is_collection(arguments.value(0)?)))
    }

    "is_null" => is_null(arguments) {
        Ok(Value::Bool(is_null(arguments.value(0)?)))
    }

    "is_string" => is_string(arguments) {
        Ok(Value::Bool(is_string(arguments.value(0)?)))
    }

    "is_number" => is_number(arguments) {
        Ok(Value::Bool(is_number(arguments.value(0)?)))
    }

    "is_function" => is_function(arguments) {
        Ok(Value::Bool(arguments.is_function(0)))
    }

    "is_email" => is_email(arguments) {
        Ok(Value::Bool(arguments.value(0)?.as_str().is_some_and(is_email)))
    }

    // Strings

    "split" => split(arguments) {
        let parts = split(arguments.string(0)?, arguments.string(1)?, arguments.optional_integer(2)?)?;
        Ok(Value::from(parts))
    }

    "words" => words(arguments) {
        Ok(Value::from(words(arguments.string(0)?)))
    }

    "camel_case" => camel_case(arguments) {
        Ok(Value::from(camel_case(arguments.string(0)?)))
    }

    "kebab_case" => kebab_case(arguments) {
        Ok(Value::from(kebab_case(arguments.string(0)?)))
    }

    "snake_case" => snake_case(arguments) {
        Ok(Value::from(snake_case(arguments.string(0)?)))
    }

    "start_case" => start_case(arguments) {
        Ok(Value::from(start_case(arguments.string(0)?)))
    }

    "lower_case" => lower_case(arguments) {
        Ok(Value::from(lower_case(arguments.string(0)?)))
    }

    "upper_case" => upper_case(arguments) {
        Ok(Value::from(upper_case(arguments.string(0)?)))
    }

    "capitalize" => capitalize(arguments) {
        Ok(Value::from(capitalize(arguments.string(0)?)))
    }

    "lower_first" => lower_first(arguments) {
        Ok(Value::from(lower_first(arguments.string(0)?)))
    }

    "upper_first" => upper_first(arguments) {
        Ok(Value::from(upper_first(arguments.string(0)?)))
    }

    "string_contains" => string_contains(arguments) {
        let offset = arguments.count_or(2, 0)?;
        Ok(Value::Bool(string_contains(arguments.string(0)?, arguments.string(1)?, offset)))
    }

    "slug" => slug(arguments) {
        let options = slug_options(arguments.optional_value(1)?)?;
        slug(arguments.string(0)?, &options).map(Value::from)
    }

    "urlify" => urlify(arguments) {
        Ok(Value::from(urlify(arguments.string(0)?)))
    }

    "truncate" => truncate(arguments) {
        let limit = arguments.count_or(1, DEFAULT_TRUNCATE_LIMIT)?;
        Ok(Value::from(truncate(arguments.string(0)?, limit)))
    }

    // Utilities

    "identity" => identity(arguments) {
        Ok(arguments.optional_value(0)?.cloned().unwrap_or_default())
    }

    "now" => now(_arguments) {
        Ok(Value::from(now()))
    }
}
