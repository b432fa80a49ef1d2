//! Random cat fact retrieval.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Fixed fact endpoint.
pub const FACT_URL: &str = "https://catfact.ninja/fact";

/// Upper bound on how long a fetch may suspend the event loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// Blocking client for the fact endpoint.
///
/// A single GET per invocation; no retries, no caching. Transport and parse
/// failures both surface as [`Error::Fact`] so the caller can render an
/// inline error state.
pub struct FactFetcher {
    agent: ureq::Agent,
    url: String,
}

impl FactFetcher {
    pub fn new() -> Self {
        Self::with_url(FACT_URL)
    }

    /// Client against a custom endpoint (used by tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        let agent = ureq::builder().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Fetch one fact.
    pub fn fetch(&self) -> Result<String> {
        debug!("fetching fact from {}", self.url);
        let body = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| Error::Fact(format!("request failed: {e}")))?
            .into_string()
            .map_err(|e| Error::Fact(format!("reading response failed: {e}")))?;
        parse_fact(&body)
    }
}

impl Default for FactFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_fact(body: &str) -> Result<String> {
    let resp: FactResponse =
        serde_json::from_str(body).map_err(|e| Error::Fact(format!("malformed response: {e}")))?;
    Ok(resp.fact)
}
