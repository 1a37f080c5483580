//! `identity` and `now`.

use chrono::Utc;

/// Returns its argument.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::identity;
/// use lowbar::value;
///
/// assert_eq!(identity(value!([1, 2])), value!([1, 2]));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// The current UTC time in seconds since the Unix epoch.
#[must_use]
pub fn now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_moves_its_argument() {
        let text = String::from("a");
        assert_eq!(identity(text), "a");
    }

    #[rstest]
    fn test_now_is_after_2020() {
        assert!(now() > 1_577_836_800);
    }

    #[rstest]
    fn test_now_tracks_the_utc_clock() {
        let before = Utc::now().timestamp();
        let current = now();
        assert!((before..=before + 1).contains(&current));
    }
}
