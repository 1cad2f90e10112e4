//! The list-sync session: one incremental update pass.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::protocol::{
    ClientInfo, CompressionType, Constraints, FETCH_ENDPOINT, FetchRequest, FetchResponse,
    ListUpdateRequest, SYNC_DESCRIPTORS,
};
use crate::store::{BackoffContext, ThreatStore};

use super::SyncOutcome;
use super::http::post_json;

/// Builds per-list update requests from the store's current state and
/// applies the response back to the store.
///
/// Cloneable so the client can hand an owned copy to its recurring sync
/// task.
#[derive(Clone)]
pub(crate) struct SyncSession {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    store: Arc<dyn ThreatStore>,
}

impl SyncSession {
    pub(crate) fn new(
        http: reqwest::Client,
        config: Arc<ClientConfig>,
        store: Arc<dyn ThreatStore>,
    ) -> Self {
        Self {
            http,
            config,
            store,
        }
    }

    /// Runs one synchronization pass.
    ///
    /// Never fatal: every failure mode lands in the outcome's `error`
    /// field. A pass that finds the lists already current short-circuits
    /// with the informational [`ClientError::AlreadyCurrent`] and no
    /// network call; a transport or protocol failure trips update-family
    /// backoff. Rescheduling is the caller's concern - the recurring
    /// loop re-arms regardless of what this returns.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn sync_once(&self) -> SyncOutcome {
        if !self.store.can_update() {
            debug!("threat lists already current, skipping pass");
            return SyncOutcome {
                updated: false,
                error: Some(ClientError::AlreadyCurrent),
            };
        }

        let url = self.config.endpoint(FETCH_ENDPOINT);
        let request = self.build_request().await;
        match post_json::<_, FetchResponse>(&self.http, &url, &request).await {
            Ok(Some(response)) => self.apply(response).await,
            Ok(None) => {
                debug!("empty update response, nothing to apply");
                SyncOutcome {
                    updated: false,
                    error: None,
                }
            }
            Err(error) => {
                warn!(error = %error, "list update request failed");
                self.store.enter_backoff(BackoffContext::Update);
                SyncOutcome {
                    updated: false,
                    error: Some(error),
                }
            }
        }
    }

    async fn apply(&self, response: FetchResponse) -> SyncOutcome {
        let updates = response.list_update_responses;
        if updates.is_empty() {
            debug!("update response carried no list payloads");
            return SyncOutcome {
                updated: false,
                error: None,
            };
        }

        debug!(lists = updates.len(), "applying list updates");
        match self.store.apply_update(updates).await {
            Ok(()) => SyncOutcome {
                updated: true,
                error: None,
            },
            Err(error) => {
                // Apply failures are surfaced but never poison the loop.
                warn!(error = %error, "store failed to apply update");
                SyncOutcome {
                    updated: false,
                    error: Some(error),
                }
            }
        }
    }

    async fn build_request(&self) -> FetchRequest {
        let constraints = Constraints {
            max_update_entries: self.config.max_update_entries,
            max_database_entries: self.config.max_database_entries,
            region: self.config.region.clone(),
            supported_compressions: vec![CompressionType::Raw],
            language: None,
            location: None,
        };

        let mut list_update_requests = Vec::with_capacity(SYNC_DESCRIPTORS.len());
        for descriptor in SYNC_DESCRIPTORS {
            let state = self
                .store
                .list_state(descriptor.threat_type)
                .await
                .unwrap_or_default();
            list_update_requests.push(ListUpdateRequest {
                threat_type: descriptor.threat_type,
                platform_type: descriptor.platform_type,
                threat_entry_type: descriptor.threat_entry_type,
                state,
                constraints: constraints.clone(),
            });
        }

        FetchRequest {
            client: ClientInfo {
                client_id: self.config.client_id.clone(),
                client_version: self.config.client_version.clone(),
            },
            list_update_requests,
        }
    }

    /// The store-owned delay until the next pass.
    pub(crate) fn update_delay(&self) -> Duration {
        self.store.update_delay()
    }
}
