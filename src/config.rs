//! Client configuration: service endpoint, client identity, and sync limits.

use std::time::Duration;

/// Default threat-list service base URL.
const DEFAULT_BASE_URL: &str = "https://safebrowsing.googleapis.com";

/// Default region code sent in update constraints when none is configured.
const DEFAULT_REGION: &str = "US";

/// Default cap on entries a single update response may carry.
const DEFAULT_MAX_UPDATE_ENTRIES: u32 = 2048;

/// Default cap on locally stored entries declared to the service.
const DEFAULT_MAX_DATABASE_ENTRIES: u32 = 4096;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`Client`](crate::client::Client).
///
/// The API key and client identity are fixed for the lifetime of the
/// client. The base URL override exists for tests that point the client
/// at a local mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key appended as the `key` query parameter on every request.
    pub api_key: String,
    /// Client identifier reported to the service (bundle/package id).
    pub client_id: String,
    /// Client version reported to the service (application version).
    pub client_version: String,
    /// Service base URL, without a trailing slash.
    pub base_url: String,
    /// ISO country code sent in update constraints.
    pub region: String,
    /// Maximum entries a single update response may carry.
    pub max_update_entries: u32,
    /// Maximum locally stored entries declared to the service.
    pub max_database_entries: u32,
    /// TCP connect timeout for protocol requests.
    pub connect_timeout: Duration,
    /// Overall request timeout for protocol requests.
    pub read_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default endpoint, region, and limits.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Service API key
    /// * `client_id` - Client identifier (bundle/package id)
    /// * `client_version` - Application version string
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        client_version: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
            client_version: client_version.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            max_update_entries: DEFAULT_MAX_UPDATE_ENTRIES,
            max_database_entries: DEFAULT_MAX_DATABASE_ENTRIES,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }

    /// Overrides the service base URL (for testing with a mock server).
    ///
    /// A trailing slash is stripped so endpoint paths can be appended
    /// uniformly.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the region code sent in update constraints.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Overrides the update-entry caps declared to the service.
    #[must_use]
    pub fn with_limits(mut self, max_update_entries: u32, max_database_entries: u32) -> Self {
        self.max_update_entries = max_update_entries;
        self.max_database_entries = max_database_entries;
        self
    }

    /// Builds an endpoint URL with the API key appended.
    #[must_use]
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}?key={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        )
    }
}
