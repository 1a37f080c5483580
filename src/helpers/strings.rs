//! String splitting, searching and case conversion.
//!
//! `camel_case`, `kebab_case` and `snake_case` go through `heck`. The
//! conversions that keep each word's case use [`words`], which splits at the
//! same boundaries: runs of letters and digits, split at any other
//! character, at a lowercase letter followed by an uppercase letter (digits
//! count as the letter before them), and before the last capital of an
//! acronym (`"XMLHttp"` is `XML` and `Http`).

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};

use crate::error::{Error, Result};

/// Splits `input` on every occurrence of `delimiter`.
///
/// `limit` bounds the result the way PHP's `explode` does:
///
/// - `None`: every part
/// - a positive limit: at most that many parts, the last holding the rest
/// - zero: treated as one
/// - a negative limit: every part except the last `-limit`
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `delimiter` is empty.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::split;
///
/// assert_eq!(split("a-b-c", "-", Some(2)).unwrap(), vec!["a", "b-c"]);
/// assert_eq!(split("a-b-c", "-", Some(-1)).unwrap(), vec!["a", "b"]);
/// assert_eq!(split("a-b-c", "-", None).unwrap(), vec!["a", "b", "c"]);
/// ```
pub fn split(input: &str, delimiter: &str, limit: Option<i64>) -> Result<Vec<String>> {
    if delimiter.is_empty() {
        return Err(Error::invalid_argument("split", "delimiter must not be empty"));
    }
    let parts: Vec<String> = match limit {
        Some(limit) if limit >= 0 => {
            let limit = usize::try_from(limit.max(1)).unwrap_or(usize::MAX);
            input.splitn(limit, delimiter).map(str::to_string).collect()
        }
        Some(limit) => {
            let mut parts: Vec<String> = input.split(delimiter).map(str::to_string).collect();
            let dropped = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
            parts.truncate(parts.len().saturating_sub(dropped));
            parts
        }
        None => input.split(delimiter).map(str::to_string).collect(),
    };
    Ok(parts)
}

/// Returns `true` when `needle` occurs in `haystack` at or after the
/// character position `offset`.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::string_contains;
///
/// assert!(string_contains("waldo", "Where's waldo?", 0));
/// assert!(!string_contains("Where", "Where's waldo?", 1));
/// ```
#[must_use]
pub fn string_contains(needle: &str, haystack: &str, offset: usize) -> bool {
    let start = if offset == 0 {
        Some(0)
    } else {
        haystack.char_indices().nth(offset).map(|(start, _)| start)
    };
    start.is_some_and(|start| haystack[start..].contains(needle))
}

/// Breaks `text` into words.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::words;
///
/// assert_eq!(words("XMLHttpRequest2go"), vec!["XML", "Http", "Request2go"]);
/// assert_eq!(words("--foo_bar baz--"), vec!["foo", "bar", "baz"]);
/// ```
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    let characters: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (position, &character) in characters.iter().enumerate() {
        if !character.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }
        if let Some(previous) = cased_before(&current) {
            let camel = previous.is_lowercase() && character.is_uppercase();
            let acronym_end = previous.is_uppercase()
                && character.is_uppercase()
                && characters
                    .get(position + 1)
                    .is_some_and(|next| next.is_lowercase());
            if camel || acronym_end {
                flush(&mut words, &mut current);
            }
        }
        current.push(character);
    }
    flush(&mut words, &mut current);
    words
}

/// The last cased letter of a word in progress; digits take the case of the
/// letter before them.
fn cased_before(current: &str) -> Option<char> {
    current.chars().rev().find(|character| !character.is_numeric())
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// `"Foo Bar"` to `"fooBar"`.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::camel_case;
///
/// assert_eq!(camel_case("Foo Bar"), "fooBar");
/// assert_eq!(camel_case("--foo-bar--"), "fooBar");
/// assert_eq!(camel_case("__FOO_BAR__"), "fooBar");
/// assert_eq!(camel_case("do_for_each"), "doForEach");
/// ```
#[must_use]
pub fn camel_case(text: &str) -> String {
    text.to_lower_camel_case()
}

/// `"Foo Bar"` to `"foo-bar"`.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::kebab_case;
///
/// assert_eq!(kebab_case("fooBar"), "foo-bar");
/// assert_eq!(kebab_case("__FOO_BAR__"), "foo-bar");
/// ```
#[must_use]
pub fn kebab_case(text: &str) -> String {
    text.to_kebab_case()
}

/// `"Foo Bar"` to `"foo_bar"`.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::snake_case;
///
/// assert_eq!(snake_case("concatDeep"), "concat_deep");
/// assert_eq!(snake_case("--FOO-BAR--"), "foo_bar");
/// ```
#[must_use]
pub fn snake_case(text: &str) -> String {
    text.to_snake_case()
}

/// `"--foo-bar--"` to `"Foo Bar"`; the rest of each word is kept as is.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::start_case;
///
/// assert_eq!(start_case("--foo-bar--"), "Foo Bar");
/// assert_eq!(start_case("fooBar"), "Foo Bar");
/// assert_eq!(start_case("__FOO_BAR__"), "FOO BAR");
/// ```
#[must_use]
pub fn start_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"--Foo-Bar--"` to `"foo bar"`.
#[must_use]
pub fn lower_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"--foo-bar--"` to `"FOO BAR"`.
#[must_use]
pub fn upper_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character and lowercases the rest.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::capitalize;
///
/// assert_eq!(capitalize("FRED"), "Fred");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    upper_first(&text.to_lowercase())
}

/// Lowercases the first character only.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::lower_first;
///
/// assert_eq!(lower_first("Fred"), "fred");
/// assert_eq!(lower_first("FRED"), "fRED");
/// ```
#[must_use]
pub fn lower_first(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(characters).collect()
    })
}

/// Uppercases the first character only.
#[must_use]
pub fn upper_first(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(0), vec!["a-b-c"])]
    #[case(Some(1), vec!["a-b-c"])]
    #[case(Some(5), vec!["a", "b", "c"])]
    #[case(Some(-3), vec![])]
    #[case(Some(-7), vec![])]
    fn test_split_limits(#[case] limit: Option<i64>, #[case] expected: Vec<&str>) {
        assert_eq!(split("a-b-c", "-", limit).unwrap(), expected);
    }

    #[rstest]
    fn test_split_rejects_empty_delimiter() {
        assert!(split("abc", "", None).is_err());
    }

    #[rstest]
    fn test_split_without_delimiter_occurrence() {
        assert_eq!(split("abc", ",", None).unwrap(), vec!["abc"]);
        assert_eq!(split("", ",", None).unwrap(), vec![""]);
    }

    #[rstest]
    fn test_string_contains_offset_past_end() {
        assert!(!string_contains("a", "abc", 10));
        assert!(string_contains("ł", "żółw", 2));
    }

    #[rstest]
    #[case("fooBar", vec!["foo", "Bar"])]
    #[case("foo2Bar", vec!["foo2", "Bar"])]
    #[case("HTMLParser", vec!["HTML", "Parser"])]
    #[case("  ", vec![])]
    fn test_words(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(text), expected);
    }

    #[rstest]
    #[case("hasKeys", "has_keys")]
    #[case("doForEachRight", "do_for_each_right")]
    #[case("getHTTPResponse", "get_http_response")]
    fn test_snake_case_of_camel_names(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(snake_case(text), expected);
    }

    #[rstest]
    fn test_words_agree_with_heck_boundaries() {
        for text in ["XMLHttpRequest2go", "foo2Bar", "getHTTPResponse", "__FOO_BAR__", "a1B2c3"] {
            let joined = words(text)
                .iter()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("_");
            assert_eq!(joined, snake_case(text), "{text}");
        }
    }

    #[rstest]
    fn test_case_conversions() {
        assert_eq!(lower_case("--Foo-Bar--"), "foo bar");
        assert_eq!(upper_case("fooBar"), "FOO BAR");
        assert_eq!(upper_first("fred"), "Fred");
        assert_eq!(capitalize(""), "");
        assert_eq!(camel_case("reduce_right"), "reduceRight");
    }
}
