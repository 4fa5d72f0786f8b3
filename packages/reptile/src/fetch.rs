//! Fetch a page and hand the parsed document to a caller transform.

use encoding_rs::Encoding;
use reqwest::blocking::Client;

use crate::config::{validate_source, FetchConfig};
use crate::document::Document;
use crate::error::FetchError;
use crate::http::{create_client, download_bytes};

/// Blocking page fetcher.
///
/// Holds one HTTP client so it can be reused across calls. Must not be
/// called from within an async runtime thread.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }

    /// Fetcher configured from `REPTILE_*` environment variables.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(FetchConfig::from_env())
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Download and parse `source`.
    ///
    /// The body is decoded with `encoding`, or UTF-8 when `None`. The
    /// document's base URL is the final URL after redirects.
    pub fn fetch_document(
        &self,
        source: &str,
        encoding: Option<&'static Encoding>,
    ) -> Result<Document, FetchError> {
        let url = validate_source(source)?;
        tracing::debug!(
            url = %url,
            encoding = encoding.map_or("UTF-8", Encoding::name),
            "Fetching document"
        );

        let download = download_bytes(&self.client, url, self.config.max_response_size)?;
        Ok(Document::from_bytes(&download.bytes, encoding).with_base_url(download.url))
    }

    /// Fetch `source` and return whatever `transform` makes of it.
    ///
    /// Retrieval failures are converted into `E`; errors from `transform`
    /// are returned as they are.
    ///
    /// # Examples
    /// ```no_run
    /// use reptile::{select_all, text, FetchConfig, Fetcher, ReptileError};
    ///
    /// let fetcher = Fetcher::new(FetchConfig::default())?;
    /// let titles = fetcher.fetch("https://www.qidian.com", None, |doc| {
    ///     let mut titles = Vec::new();
    ///     select_all(&*doc, "h2 a", |a| titles.push(text(a)))?;
    ///     Ok::<_, ReptileError>(titles)
    /// })?;
    /// # Ok::<(), ReptileError>(())
    /// ```
    pub fn fetch<T, E, F>(
        &self,
        source: &str,
        encoding: Option<&'static Encoding>,
        transform: F,
    ) -> Result<T, E>
    where
        E: From<FetchError>,
        F: FnOnce(&mut Document) -> Result<T, E>,
    {
        let mut document = self.fetch_document(source, encoding)?;
        transform(&mut document)
    }
}

/// Fetch `source` with a default [`Fetcher`] and apply `transform`.
///
/// See [`Fetcher::fetch`].
pub fn fetch<T, E, F>(
    source: &str,
    encoding: Option<&'static Encoding>,
    transform: F,
) -> Result<T, E>
where
    E: From<FetchError>,
    F: FnOnce(&mut Document) -> Result<T, E>,
{
    Fetcher::new(FetchConfig::default())?.fetch(source, encoding, transform)
}
