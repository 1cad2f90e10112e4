//! A configurable in-memory [`ThreatStore`] for integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use safebrowse::protocol::{ListUpdate, ThreatType};
use safebrowse::{BackoffContext, ClientError, ThreatStore};

/// In-memory store that records every interaction for assertions.
pub struct MockStore {
    known: Mutex<Vec<String>>,
    states: Mutex<HashMap<ThreatType, String>>,
    can_find: AtomicBool,
    can_update: AtomicBool,
    backoff_events: Mutex<Vec<BackoffContext>>,
    applied: Mutex<Vec<ListUpdate>>,
    apply_error: Mutex<Option<String>>,
    delay: Duration,
}

impl MockStore {
    /// A store with no known hashes, both capability gates open, and an
    /// hour-long update delay so recurring passes stay out of the way.
    pub fn new() -> Self {
        Self {
            known: Mutex::new(Vec::new()),
            states: Mutex::new(HashMap::new()),
            can_find: AtomicBool::new(true),
            can_update: AtomicBool::new(true),
            backoff_events: Mutex::new(Vec::new()),
            applied: Mutex::new(Vec::new()),
            apply_error: Mutex::new(None),
            delay: Duration::from_secs(3600),
        }
    }

    pub fn with_known_hashes(self, hashes: &[&str]) -> Self {
        *self.known.lock().unwrap() = hashes.iter().map(ToString::to_string).collect();
        self
    }

    pub fn with_state(self, threat_type: ThreatType, state: &str) -> Self {
        self.states
            .lock()
            .unwrap()
            .insert(threat_type, state.to_string());
        self
    }

    pub fn deny_find(self) -> Self {
        self.can_find.store(false, Ordering::SeqCst);
        self
    }

    pub fn deny_update(self) -> Self {
        self.can_update.store(false, Ordering::SeqCst);
        self
    }

    pub fn fail_apply(self, message: &str) -> Self {
        *self.apply_error.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn with_update_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn backoff_events(&self) -> Vec<BackoffContext> {
        self.backoff_events.lock().unwrap().clone()
    }

    pub fn applied_update_count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }

    pub fn state_of(&self, threat_type: ThreatType) -> Option<String> {
        self.states.lock().unwrap().get(&threat_type).cloned()
    }
}

#[async_trait]
impl ThreatStore for MockStore {
    async fn find(&self, hashes: &[String]) -> Vec<String> {
        let known = self.known.lock().unwrap();
        hashes
            .iter()
            .filter(|hash| known.contains(hash))
            .cloned()
            .collect()
    }

    async fn list_state(&self, threat_type: ThreatType) -> Option<String> {
        self.states.lock().unwrap().get(&threat_type).cloned()
    }

    fn can_find(&self) -> bool {
        self.can_find.load(Ordering::SeqCst)
    }

    fn can_update(&self) -> bool {
        self.can_update.load(Ordering::SeqCst)
    }

    fn enter_backoff(&self, context: BackoffContext) {
        self.backoff_events.lock().unwrap().push(context);
    }

    async fn apply_update(&self, updates: Vec<ListUpdate>) -> Result<(), ClientError> {
        if let Some(message) = self.apply_error.lock().unwrap().clone() {
            return Err(ClientError::database(message));
        }
        let mut states = self.states.lock().unwrap();
        for update in &updates {
            if let Some(state) = &update.new_client_state {
                states.insert(update.threat_type, state.clone());
            }
        }
        drop(states);
        self.applied.lock().unwrap().extend(updates);
        Ok(())
    }

    fn update_delay(&self) -> Duration {
        self.delay
    }
}
