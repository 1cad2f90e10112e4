//! Error types for the threat-list client.
//!
//! This module defines structured errors for both protocol operations,
//! providing context-rich error messages for debugging and for callers
//! that attach errors to lookup/sync outcomes.

use thiserror::Error;

/// Errors that can occur during lookup or synchronization operations.
///
/// No variant is fatal to the process: lookup errors are reported inside
/// a fail-closed [`LookupOutcome`](crate::client::LookupOutcome) and sync
/// errors inside a [`SyncOutcome`](crate::client::SyncOutcome) that is
/// always followed by a rescheduled pass.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error calling {url}: {source}")]
    Network {
        /// The endpoint URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout calling {url}")]
    Timeout {
        /// The endpoint URL that timed out.
        url: String,
    },

    /// Response body could not be decoded as the expected JSON shape.
    #[error("decode error from {url}: {message}")]
    Decode {
        /// The endpoint URL whose response failed to decode.
        url: String,
        /// Description of the decode failure.
        message: String,
    },

    /// Non-200 response carrying the service's structured error envelope.
    #[error("API error {code} from {url}: {message}")]
    Api {
        /// The endpoint URL that returned the error.
        url: String,
        /// The error code from the envelope (or the HTTP status when the
        /// envelope itself was undecodable).
        code: i64,
        /// The error message from the envelope.
        message: String,
    },

    /// The threat store failed to apply an update response.
    #[error("threat store error: {message}")]
    Database {
        /// Description of the store failure.
        message: String,
    },

    /// The local lists are already current; no update pass was needed.
    ///
    /// Informational: a sync outcome carrying this error is not a failure
    /// and does not trip backoff.
    #[error("threat lists are already up to date")]
    AlreadyCurrent,

    /// The shared HTTP client could not be constructed.
    #[error("HTTP client construction failed: {source}")]
    HttpClient {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a decode error.
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates an API error from a decoded error envelope.
    pub fn api(url: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self::Api {
            url: url.into(),
            code,
            message: message.into(),
        }
    }

    /// Creates a threat-store error.
    ///
    /// Intended for [`ThreatStore`](crate::store::ThreatStore) implementors
    /// reporting an update-apply failure back to the sync session.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Returns true for the informational "already up to date" marker.
    #[must_use]
    pub fn is_already_current(&self) -> bool {
        matches!(self, Self::AlreadyCurrent)
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because the
// Network/Timeout/Decode variants require the endpoint URL, which the
// source error does not reliably provide. The helper constructors are the
// pattern callers should use.
