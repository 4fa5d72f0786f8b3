//! HTTP client wrapper for downloading pages.

use std::io::Read;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Body of a successful response together with the URL it was served from.
#[derive(Debug)]
pub struct Download {
    pub url: Url,
    pub bytes: Vec<u8>,
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the timeout and user agent from `config`.
pub fn create_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)
}

/// Download a page body in a single attempt.
///
/// Non-success statuses and bodies larger than `max_size` are errors. The
/// returned URL is the final one after redirects.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Maximum accepted body size in bytes
pub fn download_bytes(client: &Client, url: Url, max_size: u64) -> Result<Download, FetchError> {
    tracing::debug!(url = %url, "Sending request");

    let mut response = client.get(url).send()?;
    let status = response.status();
    let final_url = response.url().clone();

    if !status.is_success() {
        return Err(FetchError::Status {
            url: final_url.to_string(),
            status,
        });
    }

    // Reject early when the server announces the size
    if let Some(length) = response.content_length() {
        if length > max_size {
            return Err(FetchError::ResponseTooLarge {
                url: final_url.to_string(),
                size: length,
                limit: max_size,
            });
        }
    }

    let bytes = read_limited(&mut response, final_url.as_str(), max_size)?;
    tracing::debug!(url = %final_url, status = %status, bytes = bytes.len(), "Received response");

    Ok(Download {
        url: final_url,
        bytes,
    })
}

/// Read `reader` to the end, failing once more than `max_size` bytes arrive.
///
/// At most `max_size + 1` bytes are ever buffered, so a body without a
/// Content-Length cannot grow past the limit.
fn read_limited<R: Read>(reader: R, url: &str, max_size: u64) -> Result<Vec<u8>, FetchError> {
    let mut bytes = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

    let size = bytes.len() as u64;
    if size > max_size {
        return Err(FetchError::ResponseTooLarge {
            url: url.to_string(),
            size,
            limit: max_size,
        });
    }

    Ok(bytes)
}
