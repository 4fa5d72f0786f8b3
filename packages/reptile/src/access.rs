//! Attribute and text accessors for a single element.
//!
//! Absence is `None`. Attribute reads keep empty values; text reads treat
//! blank text as absent.

use reqwest::Url;
use scraper::ElementRef;

use crate::transform::collapse_whitespace;

/// Read the attribute `key` from `element`.
///
/// Attribute names are matched case-insensitively. A blank `key` yields
/// `None` without touching the element. An attribute that is present but
/// empty yields `Some("")`.
///
/// # Examples
/// ```
/// use reptile::{attr, select_one, Document};
///
/// let doc = Document::parse(r#"<a href="" title="Home">x</a>"#);
/// let a = select_one(&doc, "a", |a| a).unwrap().unwrap();
/// assert_eq!(attr(a, "TITLE"), Some("Home".to_string()));
/// assert_eq!(attr(a, "href"), Some(String::new()));
/// assert_eq!(attr(a, ""), None);
/// ```
pub fn attr(element: ElementRef<'_>, key: &str) -> Option<String> {
    raw_attr(element, key).map(str::to_string)
}

/// Read the attribute `key` and post-process it with `transform`.
///
/// `transform` only runs when [`attr`] would return a value.
pub fn attr_with<F>(element: ElementRef<'_>, key: &str, transform: F) -> Option<String>
where
    F: FnOnce(&str) -> String,
{
    raw_attr(element, key).map(transform)
}

/// Read the text of `element` and its descendants.
///
/// Whitespace runs are collapsed to a single space and the result is trimmed.
/// Blank text yields `None`.
///
/// # Examples
/// ```
/// use reptile::{select_one, text, Document};
///
/// let doc = Document::parse("<p>  Hello,\n  <b>world</b>! </p><p>   </p>");
/// let p = select_one(&doc, "p", |p| p).unwrap().unwrap();
/// assert_eq!(text(p), Some("Hello, world!".to_string()));
/// ```
pub fn text(element: ElementRef<'_>) -> Option<String> {
    normalized_text(element)
}

/// Read the text of `element` and post-process it with `transform`.
///
/// `transform` is not called when the text is blank.
pub fn text_with<F>(element: ElementRef<'_>, transform: F) -> Option<String>
where
    F: FnOnce(&str) -> String,
{
    normalized_text(element).map(|t| transform(&t))
}

/// Read the attribute `key` and resolve it against `base`.
///
/// Returns `None` when the attribute is absent or blank, or when the value
/// cannot be joined onto `base`.
///
/// # Examples
/// ```
/// use reqwest::Url;
/// use reptile::{abs_url, select_one, Document};
///
/// let base = Url::parse("https://www.qidian.com/all/").unwrap();
/// let doc = Document::parse(r#"<a href="../rank/">rank</a>"#);
/// let a = select_one(&doc, "a", |a| a).unwrap().unwrap();
/// assert_eq!(abs_url(a, "href", &base), Some("https://www.qidian.com/rank/".to_string()));
/// ```
pub fn abs_url(element: ElementRef<'_>, key: &str, base: &Url) -> Option<String> {
    let value = raw_attr(element, key)?.trim();
    if value.is_empty() {
        return None;
    }
    base.join(value).ok().map(String::from)
}

fn raw_attr<'a>(element: ElementRef<'a>, key: &str) -> Option<&'a str> {
    // Guard on the key, not the value
    if key.trim().is_empty() {
        return None;
    }

    element
        .value()
        .attrs()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

fn normalized_text(element: ElementRef<'_>) -> Option<String> {
    // Join text nodes first; adjacent inline elements carry no separator
    let joined: String = element.text().collect();
    let out = collapse_whitespace(&joined);

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
