//! Read-only handle to the remote content repository.
//!
//! Wraps one blocking HTTP GET against the content service's query API.
//! The client holds no state between calls, performs no retries, and
//! exposes no cancellation — the transport timeout from the config is the
//! only bound on a hung fetch.
//!
//! ## Endpoint selection
//!
//! The query API is reachable on two hosts: the live API and its edge
//! cache. Production builds read through the edge cache for speed;
//! everything else bypasses it so editors see their changes immediately.
//!
//! ```text
//! https://{project_id}.api.sanity.io/v{api_version}/data/query/{dataset}      (bypass)
//! https://{project_id}.apicdn.sanity.io/v{api_version}/data/query/{dataset}   (edge cache)
//! ```
//!
//! Only published documents are visible (`perspective=published`); drafts
//! never reach the site.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ContentConfig;
use crate::query::{self, RawResult};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("content request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Response envelope of the query API. The query result sits under
/// `result`; attributes like timing are ignored.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: RawResult,
}

/// A configured read-only handle to the content repository.
pub struct ContentClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ContentClient {
    /// Build a client from the content settings.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed
    /// (TLS backend initialization).
    pub fn new(content: &ContentConfig) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(content.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            endpoint: query_endpoint(content),
        })
    }

    /// Run the composite gallery query.
    ///
    /// One network call; any transport, auth, or malformed-query failure
    /// surfaces as [`FetchError`] to the caller. An empty photo list or a
    /// null project is a successful result, not an error.
    pub fn fetch_gallery(&self) -> Result<RawResult, FetchError> {
        let response: QueryResponse = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("query", query::gallery_query().as_str()),
                ("perspective", "published"),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.result)
    }
}

/// Resolve the query endpoint URL for the given content settings.
pub fn query_endpoint(content: &ContentConfig) -> String {
    let host = if content.use_edge_cache() {
        "apicdn.sanity.io"
    } else {
        "api.sanity.io"
    };
    format!(
        "https://{project_id}.{host}/v{api_version}/data/query/{dataset}",
        project_id = content.project_id,
        api_version = content.api_version,
        dataset = content.dataset,
    )
}
