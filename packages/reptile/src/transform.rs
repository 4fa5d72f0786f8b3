//! Reusable post-processing functions for [`attr_with`](crate::attr_with)
//! and [`text_with`](crate::text_with).
//!
//! # Examples
//! ```
//! use reptile::transform::{compose, strip_chars, trim};
//!
//! let id = compose(strip_chars(&['/', '\\']), trim);
//! assert_eq!(id(" /fantasy/ "), "fantasy");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace, including non-breaking spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Remove every occurrence of the given characters.
pub fn strip_chars(chars: &[char]) -> impl Fn(&str) -> String {
    let chars = chars.to_vec();
    move |value: &str| value.chars().filter(|c| !chars.contains(c)).collect::<String>()
}

/// Replace every match of `pattern` with `replacement`.
///
/// `replacement` may reference capture groups (`$1`, `${name}`).
///
/// # Examples
/// ```
/// use reptile::transform::replace_pattern;
///
/// let count = replace_pattern(r"(\d+)万", "${1}0000").unwrap();
/// assert_eq!(count("120万"), "1200000");
/// ```
pub fn replace_pattern(
    pattern: &str,
    replacement: &str,
) -> Result<impl Fn(&str) -> String, regex::Error> {
    let regex = Regex::new(pattern)?;
    let replacement = replacement.to_string();
    Ok(move |value: &str| regex.replace_all(value, replacement.as_str()).into_owned())
}

/// Collapse whitespace runs to one space and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value.trim(), " ").into_owned()
}

/// Trim leading and trailing whitespace.
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Apply `first`, then `second`.
pub fn compose<F, G>(first: F, second: G) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
    G: Fn(&str) -> String,
{
    move |value: &str| second(&first(value))
}
