//! Text helpers for web output: slugs, links, truncation and e-mail checks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

// =============================================================================
// Slug
// =============================================================================

/// Options for [`slug`].
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::{slug, SlugOptions};
///
/// let options = SlugOptions::default().with_delimiter("_").with_limit(9);
/// assert_eq!(slug("Hello, World and more", &options).unwrap(), "hello_wor");
/// ```
#[derive(Debug, Clone)]
pub struct SlugOptions {
    /// Replaces every run of characters that are neither letters nor digits.
    pub delimiter: String,
    /// Maximum number of characters, counted before the ends are trimmed.
    pub limit: Option<usize>,
    /// Lowercases the result.
    pub lowercase: bool,
    /// Regex replacements applied first, in order.
    pub replacements: Vec<(Regex, String)>,
    /// Maps accented Latin, Greek and Cyrillic letters to ASCII.
    pub transliterate: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            delimiter: "-".to_string(),
            limit: None,
            lowercase: true,
            replacements: Vec::new(),
            transliterate: true,
        }
    }
}

impl SlugOptions {
    /// Sets the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the maximum length in characters.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keeps the original case.
    #[must_use]
    pub const fn preserve_case(mut self) -> Self {
        self.lowercase = false;
        self
    }

    /// Leaves non-ASCII letters as they are.
    #[must_use]
    pub const fn without_transliteration(mut self) -> Self {
        self.transliterate = false;
        self
    }

    /// Adds a regex replacement, applied before anything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `pattern` is not a valid regex.
    pub fn with_replacement(
        mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|error| Error::invalid_argument("slug", error.to_string()))?;
        self.replacements.push((pattern, replacement.into()));
        Ok(self)
    }
}

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]+").expect("valid slug pattern"));

/// Turns `text` into a URL-friendly slug.
///
/// In order: the custom replacements run, letters are transliterated,
/// every run of non-alphanumeric characters becomes the delimiter, repeated
/// delimiters collapse into one, the result is cut to `limit` characters,
/// delimiters are trimmed from both ends, and the result is lowercased.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the delimiter cannot be matched.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::{slug, SlugOptions};
///
/// assert_eq!(
///     slug("Jakieś zdanie z dużą ilością obcych znaków!", &SlugOptions::default()).unwrap(),
///     "jakies-zdanie-z-duza-iloscia-obcych-znakow"
/// );
/// ```
pub fn slug(text: &str, options: &SlugOptions) -> Result<String> {
    let mut slug = text.to_string();
    for (pattern, replacement) in &options.replacements {
        slug = pattern.replace_all(&slug, replacement.as_str()).into_owned();
    }
    if options.transliterate {
        slug = slug.chars().fold(String::with_capacity(slug.len()), |mut ascii, character| {
            match transliteration(character) {
                Some(replacement) => ascii.push_str(replacement),
                None => ascii.push(character),
            }
            ascii
        });
    }
    let delimiter = options.delimiter.as_str();
    slug = NON_ALPHANUMERIC.replace_all(&slug, regex::NoExpand(delimiter)).into_owned();
    if !delimiter.is_empty() {
        let repeated = Regex::new(&format!("(?:{}){{2,}}", regex::escape(delimiter)))
            .map_err(|error| Error::invalid_argument("slug", error.to_string()))?;
        slug = repeated.replace_all(&slug, regex::NoExpand(delimiter)).into_owned();
    }
    if let Some(limit) = options.limit {
        slug = slug.chars().take(limit).collect();
    }
    let slug = slug.trim_matches(|character: char| delimiter.contains(character));
    Ok(if options.lowercase {
        slug.to_lowercase()
    } else {
        slug.to_string()
    })
}

#[allow(clippy::too_many_lines, clippy::match_same_arms)]
const fn transliteration(character: char) -> Option<&'static str> {
    Some(match character {
        // Latin
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ő' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ű' => "U",
        'Ý' => "Y",
        'Þ' => "TH",
        'ß' => "ss",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ő' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        '©' => "(c)",
        // Greek
        'Α' | 'Ά' => "A",
        'Β' => "B",
        'Γ' => "G",
        'Δ' => "D",
        'Ε' | 'Έ' => "E",
        'Ζ' => "Z",
        'Η' | 'Ή' => "H",
        'Θ' => "8",
        'Ι' | 'Ί' | 'Ϊ' => "I",
        'Κ' => "K",
        'Λ' => "L",
        'Μ' => "M",
        'Ν' => "N",
        'Ξ' => "3",
        'Ο' | 'Ό' => "O",
        'Π' => "P",
        'Ρ' => "R",
        'Σ' => "S",
        'Τ' => "T",
        'Υ' | 'Ύ' | 'Ϋ' => "Y",
        'Φ' => "F",
        'Χ' => "X",
        'Ψ' => "PS",
        'Ω' | 'Ώ' => "W",
        'α' | 'ά' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' | 'έ' => "e",
        'ζ' => "z",
        'η' | 'ή' => "h",
        'θ' => "8",
        'ι' | 'ί' | 'ϊ' | 'ΐ' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "3",
        'ο' | 'ό' => "o",
        'π' => "p",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'υ' | 'ύ' | 'ϋ' | 'ΰ' => "y",
        'φ' => "f",
        'χ' => "x",
        'ψ' => "ps",
        'ω' | 'ώ' => "w",
        // Turkish
        'Ş' => "S",
        'İ' => "I",
        'Ğ' => "G",
        'ş' => "s",
        'ı' => "i",
        'ğ' => "g",
        // Russian
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' | 'Э' => "E",
        'Ё' => "Yo",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "J",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "C",
        'Ч' => "Ch",
        'Ш' | 'Щ' => "Sh",
        'Ъ' | 'Ь' | 'ъ' | 'ь' => "",
        'Ы' => "Y",
        'Ю' => "Yu",
        'Я' => "Ya",
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'э' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' | 'щ' => "sh",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        // Ukrainian
        'Є' => "Ye",
        'І' => "I",
        'Ї' => "Yi",
        'Ґ' => "G",
        'є' => "ye",
        'і' => "i",
        'ї' => "yi",
        'ґ' => "g",
        // Czech
        'Č' => "C",
        'Ď' => "D",
        'Ě' => "E",
        'Ň' => "N",
        'Ř' => "R",
        'Š' => "S",
        'Ť' => "T",
        'Ů' => "U",
        'Ž' => "Z",
        'č' => "c",
        'ď' => "d",
        'ě' => "e",
        'ň' => "n",
        'ř' => "r",
        'š' => "s",
        'ť' => "t",
        'ů' => "u",
        'ž' => "z",
        // Polish
        'Ą' => "A",
        'Ć' => "C",
        'Ę' => "e",
        'Ł' => "L",
        'Ń' => "N",
        'Ś' => "S",
        'Ź' | 'Ż' => "Z",
        'ą' => "a",
        'ć' => "c",
        'ę' => "e",
        'ł' => "l",
        'ń' => "n",
        'ś' => "s",
        'ź' | 'ż' => "z",
        // Latvian
        'Ā' => "A",
        'Ē' => "E",
        'Ģ' => "G",
        'Ī' => "i",
        'Ķ' => "k",
        'Ļ' => "L",
        'Ņ' => "N",
        'Ū' => "u",
        'ā' => "a",
        'ē' => "e",
        'ģ' => "g",
        'ī' => "i",
        'ķ' => "k",
        'ļ' => "l",
        'ņ' => "n",
        'ū' => "u",
        _ => return None,
    })
}

// =============================================================================
// Links
// =============================================================================

static URL: LazyLock<Regex> = LazyLock::new(|| {
    let protocol = r"(https?://)?";
    let domain = r"((?:[-a-zA-Z0-9]{1,63}\.)+[-a-zA-Z0-9]{2,63}|(?:[0-9]{1,3}\.){3}[0-9]{1,3})";
    let port = r"(:[0-9]{1,5})?";
    let path = r"(/[!$-/0-9:;=@_':;!a-zA-Z\x7f-\xff]*?)?";
    let query = r"(\?[!$-/0-9:;=@_':;!a-zA-Z\x7f-\xff]+?)?";
    let fragment = r"(#[!$-/0-9:;=@_':;!a-zA-Z\x7f-\xff]+?)?";
    let trailer = r#"([?.!,;:"]?(?:\s|$))"#;
    Regex::new(&format!(
        r"\b{protocol}{domain}{port}{path}{query}{fragment}{trailer}"
    ))
    .expect("valid url pattern")
});

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps the URLs found in `text` in anchor tags.
///
/// The text is HTML-escaped first. URLs without a protocol link to
/// `http://`; the link text is the URL without protocol, query or fragment.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::urlify;
///
/// assert_eq!(
///     urlify("I love https://google.com"),
///     r#"I love <a href="https://google.com">google.com</a>"#
/// );
/// ```
#[must_use]
pub fn urlify(text: &str) -> String {
    let escaped = escape_html(text);
    URL.replace_all(&escaped, |captures: &Captures<'_>| {
        let whole = captures.get(0).map_or("", |found| found.as_str());
        let trailer = captures.get(7).map_or("", |found| found.as_str());
        let url = &whole[..whole.len() - trailer.len()];
        let group = |index| captures.get(index).map_or("", |found| found.as_str());
        let href = if captures.get(1).is_some() {
            url.to_string()
        } else {
            format!("http://{url}")
        };
        format!(
            r#"<a href="{href}">{}{}{}</a>{trailer}"#,
            group(2),
            group(3),
            group(4)
        )
    })
    .into_owned()
}

// =============================================================================
// Truncation and validation
// =============================================================================

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z'-]+").expect("valid word pattern"));

/// The number of words [`truncate`] keeps when no limit is given.
pub const DEFAULT_TRUNCATE_LIMIT: usize = 40;

/// Keeps the first `limit` words of `text`, followed by `...`.
///
/// Text with at most `limit` words is returned unchanged. Words are runs of
/// ASCII letters, apostrophes and hyphens; the text between kept words is
/// kept as it is.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::truncate;
///
/// let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Pellentesque et mi orci.";
/// assert_eq!(truncate(text, 6), "Lorem ipsum dolor sit amet, consectetur...");
/// assert_eq!(truncate(text, 40), text);
/// ```
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    match WORD.find_iter(text).nth(limit) {
        Some(cut) => format!("{}...", text[..cut.start()].trim_end()),
        None => text.to_string(),
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
    let label = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";
    Regex::new(&format!(r"^{atom}(?:\.{atom})*@{label}(?:\.{label})+$"))
        .expect("valid e-mail pattern")
});

/// Returns `true` when `text` is a syntactically valid e-mail address.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::is_email;
///
/// assert!(is_email("test@test.com"));
/// assert!(!is_email("test_test.com"));
/// assert!(!is_email("a..b@test.com"));
/// ```
#[must_use]
pub fn is_email(text: &str) -> bool {
    text.len() <= 254 && EMAIL.is_match(text)
}
