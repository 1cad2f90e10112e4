//! The client façade: owns the lookup and sync sessions and the
//! recurring synchronization task.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use safebrowse::{Client, ClientConfig, ThreatStore};
//!
//! # async fn example(store: Arc<dyn ThreatStore>) -> Result<(), safebrowse::ClientError> {
//! let config = ClientConfig::new("api-key", "com.example.app", "1.0");
//! let client = Client::new(config, store)?;
//!
//! let outcome = client.check_url("HTTP://example.COM../login").await;
//! if !outcome.is_safe {
//!     println!("blocked: {:?}", outcome.error);
//! }
//! # Ok(())
//! # }
//! ```

mod http;
mod lookup;
mod sync;

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::store::ThreatStore;
use crate::urlkeys;

use lookup::LookupSession;
use sync::SyncSession;

/// Result of one URL or hash-sequence lookup.
///
/// Errors are fail-closed: when `error` is set, `is_safe` is always
/// false. The reverse does not hold - an unresolvable potential match
/// during backoff is reported unsafe with no error.
#[derive(Debug)]
pub struct LookupOutcome {
    /// Whether the lookup concluded the URL is safe.
    pub is_safe: bool,
    /// The failure that forced a conservative verdict, if any.
    pub error: Option<ClientError>,
}

impl LookupOutcome {
    /// A safe verdict with no error.
    #[must_use]
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            error: None,
        }
    }

    /// An unsafe verdict, optionally carrying the error that forced it.
    #[must_use]
    pub fn threat(error: Option<ClientError>) -> Self {
        Self {
            is_safe: false,
            error,
        }
    }
}

/// Result of one synchronization pass.
#[derive(Debug)]
pub struct SyncOutcome {
    /// Whether any list payload was applied to the store.
    pub updated: bool,
    /// Non-fatal error detail; [`ClientError::AlreadyCurrent`] marks a
    /// pass that was skipped because the lists were current.
    pub error: Option<ClientError>,
}

/// A threat-list protocol client.
///
/// Explicitly constructed and dependency-injected: callers build one
/// instance with their [`ThreatStore`] and share it by reference. On
/// construction the client spawns a recurring sync task that runs an
/// immediate first pass and then re-arms after every completion, waiting
/// the store-owned [`update_delay`](ThreatStore::update_delay) between
/// passes. The task handle is owned by the client; [`Client::shutdown`]
/// (or drop) cancels it.
///
/// Must be constructed inside a Tokio runtime.
pub struct Client {
    lookup: LookupSession,
    sync: SyncSession,
    sync_task: Mutex<Option<JoinHandle<()>>>,
}

impl Client {
    /// Creates a client and starts its recurring sync task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClient`] when the shared HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig, store: Arc<dyn ThreatStore>) -> Result<Self, ClientError> {
        let config = Arc::new(config);
        let http = http::build_http_client(&config)?;

        let lookup = LookupSession::new(http.clone(), Arc::clone(&config), Arc::clone(&store));
        let sync = SyncSession::new(http, config, store);
        let sync_task = tokio::spawn(run_sync_loop(sync.clone()));

        Ok(Self {
            lookup,
            sync,
            sync_task: Mutex::new(Some(sync_task)),
        })
    }

    /// Checks whether a raw URL is safe.
    ///
    /// Canonicalizes the URL, expands it into candidate keys, hashes
    /// them, and runs a lookup. Completion is always asynchronous; a
    /// caller that drops the returned future cancels the lookup.
    #[tracing::instrument(skip(self))]
    pub async fn check_url(&self, raw: &str) -> LookupOutcome {
        let canonical = urlkeys::canonicalize(raw);
        let candidates: Vec<String> = urlkeys::expand(&canonical)
            .iter()
            .map(|key| urlkeys::digest(key))
            .collect();
        debug!(url = %canonical, candidates = candidates.len(), "checking URL");
        self.lookup.find(&candidates).await
    }

    /// Checks an already-derived ordered sequence of candidate hashes.
    pub async fn find(&self, candidates: &[String]) -> LookupOutcome {
        self.lookup.find(candidates).await
    }

    /// Runs one manual synchronization pass, independent of the
    /// recurring task.
    pub async fn fetch(&self) -> SyncOutcome {
        self.sync.sync_once().await
    }

    /// Cancels all owned task handles.
    ///
    /// Idempotent; also invoked on drop. In-flight HTTP requests issued
    /// by the sync task are aborted with it.
    pub fn shutdown(&self) {
        if let Ok(mut guard) = self.sync_task.lock()
            && let Some(task) = guard.take()
        {
            task.abort();
        }
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The recurring sync loop: run a pass, then sleep for the store-owned
/// delay, forever. Cancelled by aborting the owning task handle.
async fn run_sync_loop(sync: SyncSession) {
    loop {
        let outcome = sync.sync_once().await;
        match &outcome.error {
            Some(error) if !error.is_already_current() => {
                warn!(error = %error, "sync pass failed, will retry after delay");
            }
            _ => debug!(updated = outcome.updated, "sync pass complete"),
        }
        tokio::time::sleep(sync.update_delay()).await;
    }
}
