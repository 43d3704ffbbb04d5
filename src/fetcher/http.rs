//! HTTP lookup client
//!
//! `GET <endpoint>?q=<query>` returning a JSON array of objects with at least
//! a `name` field, in relevance order.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::{Client, Url};

use super::{Candidate, CandidateSource, FetchError};
use crate::config::LookupConfig;

/// Lookup service client
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: Client,
    endpoint: Url,
}

impl HttpLookup {
    /// Create a client for the configured endpoint
    pub fn from_config(config: &LookupConfig) -> Result<Self, FetchError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// The URL requested for `query`
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    async fn get(&self, query: &str) -> Result<Vec<Candidate>, FetchError> {
        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_candidates(&body)
    }
}

impl CandidateSource for HttpLookup {
    fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Candidate>, FetchError>> {
        self.get(query).boxed()
    }
}

/// Validate an endpoint; only http and https are accepted
pub fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    let url = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidEndpoint(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

/// Parse a lookup response body
pub fn parse_candidates(body: &str) -> Result<Vec<Candidate>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
