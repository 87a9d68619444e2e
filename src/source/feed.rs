//! Simulated network source for the infinite feed.
//!
//! Requests go in with [`FeedSource::submit`] and responses come back from
//! [`FeedSource::poll`], which never blocks. The event loop polls on every
//! tick. Responses carry the request token so the loader can drop stale ones.

use crate::model::CatalogError;
use crate::state::{LoadRequest, LoadToken};
use crate::stories::fixtures::{feed_batch, FeedBatch};
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a feed request produced no batch.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The batch could not be built.
    #[error("Feed batch failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The worker thread is gone.
    #[error("Feed worker stopped")]
    WorkerGone,
}

/// Outcome of one request.
#[derive(Debug)]
pub struct FeedResponse {
    /// Token of the request this answers.
    pub token: LoadToken,
    /// Batch or failure.
    pub result: Result<FeedBatch, FeedError>,
}

/// Where feed requests are resolved.
#[derive(Debug)]
pub enum FeedSource {
    /// Background thread that sleeps before answering.
    Worker(FeedWorker),
    /// Resolved on the next poll with no delay (tests and benchmarks).
    Inline(VecDeque<FeedResponse>),
}

impl FeedSource {
    /// Threaded source answering after `delay`.
    pub fn worker(delay: Duration) -> Self {
        FeedSource::Worker(FeedWorker::spawn(delay))
    }

    /// Synchronous source.
    pub fn inline() -> Self {
        FeedSource::Inline(VecDeque::new())
    }

    /// Start resolving a request.
    pub fn submit(&mut self, request: LoadRequest) {
        debug!(
            offset = request.offset,
            limit = request.limit,
            "Feed request submitted"
        );
        match self {
            FeedSource::Worker(worker) => worker.submit(request),
            FeedSource::Inline(queue) => queue.push_back(resolve(request)),
        }
    }

    /// Drain every response that is ready.
    pub fn poll(&mut self) -> Vec<FeedResponse> {
        match self {
            FeedSource::Worker(worker) => worker.poll(),
            FeedSource::Inline(queue) => queue.drain(..).collect(),
        }
    }
}

fn resolve(request: LoadRequest) -> FeedResponse {
    FeedResponse {
        token: request.token,
        result: feed_batch(request.offset, request.limit).map_err(FeedError::from),
    }
}

/// Worker thread plus its channels.
///
/// Dropping the worker closes the request channel and joins the thread.
#[derive(Debug)]
pub struct FeedWorker {
    requests: Option<Sender<LoadRequest>>,
    responses: Receiver<FeedResponse>,
    failed: Vec<LoadToken>,
    handle: Option<JoinHandle<()>>,
}

impl FeedWorker {
    /// Spawn the worker.
    pub fn spawn(delay: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                thread::sleep(delay);
                if response_tx.send(resolve(request)).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            responses: response_rx,
            failed: Vec::new(),
            handle: Some(handle),
        }
    }

    fn submit(&mut self, request: LoadRequest) {
        let sent = self
            .requests
            .as_ref()
            .map(|tx| tx.send(request).is_ok())
            .unwrap_or(false);
        if !sent {
            warn!("Feed worker is not running; request failed");
            self.failed.push(request.token);
        }
    }

    fn poll(&mut self) -> Vec<FeedResponse> {
        let mut ready: Vec<FeedResponse> = self
            .failed
            .drain(..)
            .map(|token| FeedResponse {
                token,
                result: Err(FeedError::WorkerGone),
            })
            .collect();
        ready.extend(self.responses.try_iter());
        ready
    }
}

impl Drop for FeedWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Feed worker panicked");
            }
        }
    }
}
