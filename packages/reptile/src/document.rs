//! Parsed documents and character decoding.
//!
//! A [`Document`] owns the tree produced by the HTML parser together with the
//! URL the markup was fetched from, if any. Decoding defaults to UTF-8; a
//! byte order mark in the input takes precedence over the requested encoding.

use ego_tree::NodeId;
use encoding_rs::{Encoding, UTF_8};
use reqwest::Url;
use scraper::{ElementRef, Html};

use crate::access;
use crate::error::FetchError;

/// Root of a parsed page.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parse a complete HTML document from a string.
    ///
    /// # Examples
    /// ```
    /// use reptile::Document;
    ///
    /// let doc = Document::parse("<p>hello</p>");
    /// assert_eq!(doc.root().value().name(), "html");
    /// ```
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            base_url: None,
        }
    }

    /// Decode raw bytes with `encoding` (UTF-8 when `None`) and parse them.
    pub fn from_bytes(bytes: &[u8], encoding: Option<&'static Encoding>) -> Self {
        Self::parse(&decode(bytes, encoding))
    }

    /// Attach the URL the document was retrieved from.
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// URL the document was retrieved from.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Read the attribute `key` of `element` and resolve it against this
    /// document's base URL.
    ///
    /// Returns `None` when the document has no base URL; otherwise behaves
    /// like [`abs_url`](crate::access::abs_url).
    pub fn abs_url(&self, element: ElementRef<'_>, key: &str) -> Option<String> {
        access::abs_url(element, key, self.base_url.as_ref()?)
    }

    /// The `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Underlying parser tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    pub(crate) fn html_mut(&mut self) -> &mut Html {
        &mut self.html
    }

    /// Look up an element by node id.
    ///
    /// Returns `None` if `id` does not name an element. Detached elements are
    /// still returned; use [`Document::is_attached`] to tell them apart.
    pub fn get(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Whether the node is still reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root = self.html.tree.root().id();
        match self.html.tree.get(id) {
            Some(node) if node.id() == root => true,
            Some(node) => node.ancestors().any(|ancestor| ancestor.id() == root),
            None => false,
        }
    }
}

/// Look up an encoding by its charset label (e.g. `"gbk"`, `"UTF-8"`).
///
/// # Examples
/// ```
/// use reptile::document::encoding_for_label;
///
/// assert_eq!(encoding_for_label("gb2312").unwrap().name(), "GBK");
/// assert!(encoding_for_label("no-such-charset").is_err());
/// ```
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, FetchError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| FetchError::UnsupportedEncoding(label.to_string()))
}

/// Decode bytes to a string, replacing malformed sequences.
pub fn decode(bytes: &[u8], encoding: Option<&'static Encoding>) -> String {
    let requested = encoding.unwrap_or(UTF_8);
    let (text, used, had_errors) = requested.decode(bytes);

    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "Malformed byte sequences replaced while decoding"
        );
    }

    text.into_owned()
}
