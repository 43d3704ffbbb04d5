//! Suggestion fetching
//!
//! Turns a query into an ordered list of candidates via the lookup service.
//! Requests run on a worker thread; the UI thread issues them with
//! [`SuggestionFetcher::fetch`] and drains results with
//! [`SuggestionFetcher::poll`]. Every request carries an id so the caller can
//! discard responses that belong to a superseded query.

mod http;
mod worker;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use futures::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

pub use http::HttpLookup;
pub use worker::spawn_worker;

/// One suggestible entity returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub name: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors that can occur while looking up candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Endpoint URL could not be used
    #[error("Invalid lookup endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Lookup returned HTTP {code}")]
    Status { code: u16 },

    /// Response body was not a JSON array of candidates
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A source of candidates, usually the remote lookup service
pub trait CandidateSource: Send + Sync {
    fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Candidate>, FetchError>>;
}

/// Request sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    pub query: String,
}

/// Response received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub request_id: u64,
    pub result: Result<Vec<Candidate>, FetchError>,
}

/// Issues lookup requests and collects their responses
pub struct SuggestionFetcher {
    request_tx: Option<UnboundedSender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
    /// Id of the last request issued, 0 before the first
    request_id: u64,
}

impl SuggestionFetcher {
    /// A fetcher with no worker attached; every fetch is dropped
    pub fn disconnected() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Spawn a worker thread that serves requests from `source`
    pub fn spawn(source: Arc<dyn CandidateSource>) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx);

        let mut fetcher = Self::disconnected();
        fetcher.set_channels(request_tx, response_rx);
        fetcher
    }

    /// Attach the channels to a worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Issue a lookup for `query`
    ///
    /// Returns the id of the new request, or `None` when no worker is
    /// listening. The id advances even when the send fails, so any response
    /// still in flight is stale from this point on.
    pub fn fetch(&mut self, query: &str) -> Option<u64> {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let tx = self.request_tx.as_ref()?;
        let request = FetchRequest {
            request_id,
            query: query.to_string(),
        };
        match tx.send(request) {
            Ok(()) => Some(request_id),
            Err(_) => {
                log::debug!("Lookup worker is gone, dropping request {}", request_id);
                None
            }
        }
    }

    /// Drain every response that has arrived so far
    pub fn poll(&mut self) -> Vec<FetchResponse> {
        let mut responses = Vec::new();
        let Some(rx) = &self.response_rx else {
            return responses;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Lookup worker disconnected");
                    self.response_rx = None;
                    break;
                }
            }
        }
        responses
    }

    pub fn last_request_id(&self) -> u64 {
        self.request_id
    }
}
