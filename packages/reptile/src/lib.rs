//! Reptile - fetch HTML pages and extract field values with CSS selectors.
//!
//! A scraping script supplies a URL, an optional character encoding and a
//! transform. The transform receives the parsed [`Document`] and walks it with
//! [`select_one`] / [`select_all`], reading values with [`attr`] and [`text`]
//! and pruning noise with [`remove`].
//!
//! # Example
//!
//! ```
//! use reptile::{attr_with, select_one, text, try_select_all, Document, Record, ReptileError};
//!
//! let doc = Document::parse(r#"
//!     <ul id="classify-list"><li><a href="/chn21/"><i>Fantasy</i></a></li></ul>
//! "#);
//!
//! let mut records = Vec::new();
//! try_select_all(&doc, "#classify-list a", |a| {
//!     let mut record = Record::new();
//!     record.insert("id".into(), attr_with(a, "href", |v| v.replace('/', "")));
//!     record.insert("name".into(), select_one(a, "i", text)?.flatten());
//!     records.push(record);
//!     Ok::<(), ReptileError>(())
//! })?;
//!
//! assert_eq!(records[0]["id"].as_deref(), Some("chn21"));
//! assert_eq!(records[0]["name"].as_deref(), Some("Fantasy"));
//! # Ok::<(), ReptileError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fetch configuration and source validation
//! - [`error`]: Error types and Result alias
//! - [`http`]: Blocking HTTP client
//! - [`document`]: Parsed documents and decoding
//! - [`fetch`]: Source to document to caller transform
//! - [`selector`]: Selector parsing
//! - [`extract`]: Single- and all-match queries
//! - [`access`]: Attribute and text accessors
//! - [`mutate`]: Element removal
//! - [`transform`]: Reusable post-processing functions

pub mod access;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod mutate;
pub mod selector;
pub mod transform;

use std::collections::BTreeMap;

pub use access::{abs_url, attr, attr_with, text, text_with};
pub use config::FetchConfig;
pub use document::Document;
pub use error::{FetchError, QueryError, ReptileError, Result};
pub use extract::{select, select_all, select_one, try_select_all, try_select_one, Scope};
pub use fetch::{fetch, Fetcher};
pub use mutate::{remove, remove_all};

// Re-export parser types that appear in the public API
pub use ego_tree::NodeId;
pub use encoding_rs::Encoding;
pub use scraper::ElementRef;

/// Field name to extracted value, `None` where the value was absent.
pub type Record = BTreeMap<String, Option<String>>;
