//! The local threat database seam.
//!
//! The persistent store - hash-prefix storage, update merging, backoff
//! timers, and update cadence - is a collaborator, not part of this
//! crate. [`ThreatStore`] is the contract the lookup and sync sessions
//! drive it through.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::protocol::{ListUpdate, ThreatType};

/// Which operation family entered backoff.
///
/// The store owns the backoff timer and policy; the sessions only signal
/// entry after a failed request, and consult the matching capability gate
/// ([`ThreatStore::can_find`] / [`ThreatStore::can_update`]) before the
/// next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffContext {
    /// Full-hash resolution requests.
    Find,
    /// List update requests.
    Update,
}

/// Contract between the client sessions and the local threat database.
///
/// Implementations must tolerate concurrent reads (an in-flight sync and
/// a concurrent lookup are expected) and serialize their own writes
/// during an update apply.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `Arc<dyn ThreatStore>`. Rust 2024 native async traits are not
/// object-safe, so `async_trait` is required for injection into the
/// client.
#[async_trait]
pub trait ThreatStore: Send + Sync {
    /// Returns the subset of `hashes` present in the local database.
    async fn find(&self, hashes: &[String]) -> Vec<String>;

    /// Returns the opaque version token for a threat list, or `None`
    /// before the first successful sync.
    async fn list_state(&self, threat_type: ThreatType) -> Option<String>;

    /// Whether full-hash resolution is currently permitted (false while
    /// the find family is in backoff).
    fn can_find(&self) -> bool;

    /// Whether a list update is currently worthwhile (false while the
    /// lists are current or the update family is in backoff).
    fn can_update(&self) -> bool;

    /// Signals that a request for the given operation family failed.
    ///
    /// Fire-and-forget: the sessions do not wait for the backoff state
    /// to be recorded before proceeding.
    fn enter_backoff(&self, context: BackoffContext);

    /// Applies the per-list payloads of an update response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Database`] when the update cannot be
    /// merged; the sync loop surfaces the error but still re-arms.
    async fn apply_update(&self, updates: Vec<ListUpdate>) -> Result<(), ClientError>;

    /// How long to wait before the next sync pass.
    ///
    /// This is the scheduler seam: the store owns cadence (including any
    /// stretched delay while in backoff); the client's sync loop only
    /// sleeps for whatever this returns and re-arms.
    fn update_delay(&self) -> Duration;
}
