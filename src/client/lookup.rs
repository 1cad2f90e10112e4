//! The threat-lookup session: one "is this URL safe" check.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::protocol::{
    ClientInfo, FIND_ENDPOINT, FIND_ENTRY_TYPES, FIND_PLATFORM_TYPES, FIND_THREAT_TYPES,
    FindRequest, FindResponse, ThreatEntry, ThreatInfo,
};
use crate::store::{BackoffContext, ThreatStore};

use super::LookupOutcome;
use super::http::post_json;

/// Orchestrates a single lookup: local prefix discovery, then full-hash
/// resolution against the remote service when the store reports hits.
pub(crate) struct LookupSession {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    store: Arc<dyn ThreatStore>,
}

impl LookupSession {
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

    /// Checks an ordered sequence of candidate hashes.
    ///
    /// The fast path - no local prefix hit - completes without any
    /// network traffic. A local hit escalates to `fullHashes:find`
    /// unless the find family is gated by backoff, in which case the
    /// unresolvable potential match is conservatively reported as a
    /// threat (fail closed) with no error.
    #[tracing::instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    pub(crate) async fn find(&self, candidates: &[String]) -> LookupOutcome {
        if candidates.is_empty() {
            return LookupOutcome::safe();
        }

        let discovered = self.store.find(candidates).await;
        if discovered.is_empty() {
            debug!("no local prefix hits");
            return LookupOutcome::safe();
        }

        if !self.store.can_find() {
            debug!(
                discovered = discovered.len(),
                "find family in backoff, failing closed"
            );
            return LookupOutcome::threat(None);
        }

        let url = self.config.endpoint(FIND_ENDPOINT);
        let request = self.build_request(discovered);
        match post_json::<_, FindResponse>(&self.http, &url, &request).await {
            Ok(response) => {
                let matches = response.map(|r| r.matches).unwrap_or_default();
                if matches.is_empty() {
                    debug!("full-hash resolution returned no matches");
                    LookupOutcome::safe()
                } else {
                    // Any match counts as a hit, regardless of which
                    // list or entry type it names.
                    debug!(matches = matches.len(), "confirmed threat");
                    LookupOutcome::threat(None)
                }
            }
            Err(error) => {
                warn!(error = %error, "full-hash resolution failed, failing closed");
                self.store.enter_backoff(BackoffContext::Find);
                LookupOutcome::threat(Some(error))
            }
        }
    }

    fn build_request(&self, discovered: Vec<String>) -> FindRequest {
        FindRequest {
            client: ClientInfo {
                client_id: self.config.client_id.clone(),
                client_version: self.config.client_version.clone(),
            },
            threat_info: ThreatInfo {
                threat_types: FIND_THREAT_TYPES.to_vec(),
                platform_types: FIND_PLATFORM_TYPES.to_vec(),
                threat_entry_types: FIND_ENTRY_TYPES.to_vec(),
                threat_entries: discovered
                    .into_iter()
                    .map(|hash| ThreatEntry { hash })
                    .collect(),
            },
        }
    }
}
