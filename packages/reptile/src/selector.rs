//! Selector parsing.

use scraper::Selector;

use crate::error::QueryError;

/// Parse a CSS selector, passing the string through verbatim.
///
/// # Examples
/// ```
/// use reptile::selector::parse_selector;
///
/// assert!(parse_selector("#classify-list>dl>dd>a").is_ok());
/// assert!(parse_selector("div[").is_err());
/// ```
pub fn parse_selector(selector: &str) -> Result<Selector, QueryError> {
    Selector::parse(selector).map_err(|e| QueryError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
