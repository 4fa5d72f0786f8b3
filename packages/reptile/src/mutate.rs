//! Element removal.
//!
//! Elements are addressed by [`NodeId`] because removal needs the document
//! mutably while an [`ElementRef`] borrows it. Detached nodes stay in the
//! arena but are no longer reachable from the root.

use ego_tree::NodeId;
use scraper::{ElementRef, Selector};

use crate::document::Document;
use crate::error::QueryError;
use crate::extract::Scope;
use crate::selector::parse_selector;

/// Remove `element`, or its descendants matching `selectors`.
///
/// With no selectors the element itself is detached from its parent.
/// Otherwise each selector is applied in order, and all of its matches are
/// detached before the next selector runs. An invalid selector stops the
/// call; removals made for earlier selectors are kept.
///
/// # Examples
/// ```
/// use reptile::{remove, select, Document};
///
/// let mut doc = Document::parse(r#"<div class="ad"></div><p>keep</p><div class="ad"></div>"#);
/// let root = doc.root().id();
/// remove(&mut doc, root, &["div.ad"]).unwrap();
/// assert!(select(&doc, "div.ad").unwrap().is_empty());
/// assert_eq!(select(&doc, "p").unwrap().len(), 1);
/// ```
pub fn remove(
    document: &mut Document,
    element: NodeId,
    selectors: &[&str],
) -> Result<(), QueryError> {
    if selectors.is_empty() {
        detach(document, element);
        tracing::debug!(node = ?element, "Removed element");
        return Ok(());
    }

    for selector in selectors {
        let parsed = parse_selector(selector)?;
        let targets = matches_within(document, element, &parsed);
        for id in &targets {
            detach(document, *id);
        }
        tracing::debug!(selector, removed = targets.len(), "Removed matching elements");
    }

    Ok(())
}

/// Remove every element in the document matching `selectors`.
pub fn remove_all(document: &mut Document, selectors: &[&str]) -> Result<(), QueryError> {
    if selectors.is_empty() {
        return Ok(());
    }
    let root = document.html().tree.root().id();
    remove(document, root, selectors)
}

fn matches_within(document: &Document, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
    let tree = &document.html().tree;
    let Some(node) = tree.get(scope) else {
        return Vec::new();
    };

    let matches = match ElementRef::wrap(node) {
        Some(element) => element.all_matches(selector),
        None if node.id() == tree.root().id() => document.all_matches(selector),
        None => Vec::new(),
    };
    matches.into_iter().map(|e| e.id()).collect()
}

fn detach(document: &mut Document, id: NodeId) {
    // Detaching the root is a no-op: it has no parent
    if let Some(mut node) = document.html_mut().tree.get_mut(id) {
        node.detach();
    }
}
