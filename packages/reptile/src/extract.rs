//! Selector queries against a document or a sub-element.
//!
//! Every query runs over the descendants of its scope and visits matches in
//! document order. An empty match set is not an error: single-match queries
//! return `None` and callbacks for all-match queries are never invoked.

use scraper::{ElementRef, Selector};

use crate::document::Document;
use crate::error::QueryError;
use crate::selector::parse_selector;

/// Something a selector can be run against.
pub trait Scope<'a>: Copy {
    /// First matching descendant in document order.
    fn first_match(self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// All matching descendants in document order.
    fn all_matches(self, selector: &Selector) -> Vec<ElementRef<'a>>;
}

impl<'a> Scope<'a> for &'a Document {
    fn first_match(self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html().select(selector).next()
    }

    fn all_matches(self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html().select(selector).collect()
    }
}

impl<'a> Scope<'a> for ElementRef<'a> {
    fn first_match(self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    fn all_matches(self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }
}

/// Apply `process` to the first element matching `selector`.
///
/// Returns `Ok(None)` without calling `process` when nothing matches.
///
/// # Examples
/// ```
/// use reptile::{select_one, text, Document};
///
/// let doc = Document::parse("<ul><li>one</li><li>two</li></ul>");
/// let first = select_one(&doc, "li", |li| text(li)).unwrap();
/// assert_eq!(first, Some(Some("one".to_string())));
///
/// let missing = select_one(&doc, "table", |t| text(t)).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn select_one<'a, S, R, F>(
    scope: S,
    selector: &str,
    process: F,
) -> Result<Option<R>, QueryError>
where
    S: Scope<'a>,
    F: FnOnce(ElementRef<'a>) -> R,
{
    let selector = parse_selector(selector)?;
    Ok(scope.first_match(&selector).map(process))
}

/// Like [`select_one`], for callbacks that can fail.
///
/// Callback errors are returned unchanged.
pub fn try_select_one<'a, S, R, E, F>(
    scope: S,
    selector: &str,
    process: F,
) -> Result<Option<R>, E>
where
    S: Scope<'a>,
    E: From<QueryError>,
    F: FnOnce(ElementRef<'a>) -> Result<R, E>,
{
    let selector = parse_selector(selector)?;
    scope.first_match(&selector).map(process).transpose()
}

/// Call `process` once per element matching `selector`, in document order.
///
/// Whatever `process` returns is discarded; collect results through state the
/// closure captures.
///
/// # Examples
/// ```
/// use reptile::{attr, select_all, Document};
///
/// let doc = Document::parse(r#"<a href="/x">x</a><a href="/y">y</a>"#);
/// let mut links = Vec::new();
/// select_all(&doc, "a", |a| links.push(attr(a, "href"))).unwrap();
/// assert_eq!(links, vec![Some("/x".to_string()), Some("/y".to_string())]);
/// ```
pub fn select_all<'a, S, R, F>(
    scope: S,
    selector: &str,
    mut process: F,
) -> Result<(), QueryError>
where
    S: Scope<'a>,
    F: FnMut(ElementRef<'a>) -> R,
{
    let selector = parse_selector(selector)?;
    for element in scope.all_matches(&selector) {
        process(element);
    }
    Ok(())
}

/// Like [`select_all`], stopping at the first callback error.
pub fn try_select_all<'a, S, E, F>(scope: S, selector: &str, mut process: F) -> Result<(), E>
where
    S: Scope<'a>,
    E: From<QueryError>,
    F: FnMut(ElementRef<'a>) -> Result<(), E>,
{
    let selector = parse_selector(selector)?;
    for element in scope.all_matches(&selector) {
        process(element)?;
    }
    Ok(())
}

/// All elements matching `selector`, in document order.
pub fn select<'a, S>(scope: S, selector: &str) -> Result<Vec<ElementRef<'a>>, QueryError>
where
    S: Scope<'a>,
{
    let selector = parse_selector(selector)?;
    Ok(scope.all_matches(&selector))
}
