//! Lookup worker thread
//!
//! Runs a single-threaded tokio runtime on a background thread so lookups
//! never block the UI. Each request becomes its own task: several lookups
//! may be in flight at once and they complete in whatever order the service
//! answers. Nothing is cancelled; the UI thread filters stale responses by id.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{Candidate, CandidateSource, FetchRequest, FetchResponse};

/// Spawn the lookup worker thread
///
/// The thread exits once the request channel is closed and every in-flight
/// lookup has been answered.
pub fn spawn_worker(
    source: Arc<dyn CandidateSource>,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::warn!("Failed to start lookup runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(source, request_rx, response_tx));
    });
}

/// Main worker loop - serves requests until the channel is closed
async fn worker_loop(
    source: Arc<dyn CandidateSource>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let mut tasks = Vec::new();

    while let Some(request) = request_rx.recv().await {
        let source = Arc::clone(&source);
        let response_tx = response_tx.clone();
        tasks.push(tokio::spawn(async move {
            handle_request(source.as_ref(), request, &response_tx).await;
        }));
        tasks.retain(|task| !task.is_finished());
    }

    for task in tasks {
        let _ = task.await;
    }
    log::debug!("Lookup worker shutting down");
}

async fn handle_request(
    source: &dyn CandidateSource,
    request: FetchRequest,
    response_tx: &Sender<FetchResponse>,
) {
    let result = source
        .lookup(&request.query)
        .await
        .map(drop_unnamed);

    if let Err(e) = &result {
        log::debug!("Lookup {} for {:?} failed: {}", request.request_id, request.query, e);
    }

    // The UI side may already be gone; nothing left to do then
    let _ = response_tx.send(FetchResponse {
        request_id: request.request_id,
        result,
    });
}

fn drop_unnamed(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let before = candidates.len();
    let kept: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| !c.name.is_empty())
        .collect();
    if kept.len() != before {
        log::warn!("Dropped {} candidates without a name", before - kept.len());
    }
    kept
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
