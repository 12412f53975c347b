//! Shared test doubles for the connection flow tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use regen_wallet::wallet::{ProviderError, ProviderEvent, WalletProvider};
use serde_json::Value;
use tokio::sync::broadcast;

/// Scripted wallet handle: per-method response queues, a recorded call log,
/// and a manual event emitter.
pub struct MockProvider {
    metamask: bool,
    coinbase: bool,
    responses: Mutex<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: Mutex<Vec<String>>,
    events: broadcast::Sender<ProviderEvent>,
}

impl MockProvider {
    pub fn new(metamask: bool, coinbase: bool) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            metamask,
            coinbase,
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn metamask() -> Self {
        Self::new(true, false)
    }

    pub fn coinbase() -> Self {
        Self::new(false, true)
    }

    /// Queue the next response for `method`.
    pub fn enqueue(&self, method: &str, response: Result<Value, ProviderError>) {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    /// Methods requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Emit a handle event to subscribers.
    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, _params: Value) -> Result<Value, ProviderError> {
        self.calls.lock().unwrap().push(method.to_string());
        self.responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(ProviderError::new(
                    -32601,
                    format!("no scripted response for {}", method),
                ))
            })
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }

    fn is_metamask(&self) -> bool {
        self.metamask
    }

    fn is_coinbase_wallet(&self) -> bool {
        self.coinbase
    }
}
