//! Hard-reload coordination for the shell.

use tokio::sync::broadcast;

use crate::chain::ChainId;

/// Coordinator for forcing a full application reload after a chain change.
///
/// Provider objects bound to a prior chain are not safely reusable, so a
/// chain change demands a rebuild of everything downstream of the wallet.
/// The signal carries the chain id the handle moved to, letting the shell
/// tell "back on the target network" apart from "stranded elsewhere" when it
/// comes back up. The shell subscribes; the account watcher triggers.
#[derive(Clone)]
pub struct ReloadSignal {
    tx: broadcast::Sender<ChainId>,
}

impl ReloadSignal {
    /// Create a new reload coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to reload notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ChainId> {
        self.tx.subscribe()
    }

    /// Demand a reload because the handle now targets `chain_id`.
    pub fn trigger(&self, chain_id: ChainId) {
        let _ = self.tx.send(chain_id);
    }

    /// Get the number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ReloadSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_learns_new_chain() {
        let signal = ReloadSignal::new();
        let mut rx = signal.subscribe();
        signal.trigger(ChainId(84532));
        assert_eq!(rx.recv().await.unwrap(), ChainId(84532));
    }

    #[tokio::test]
    async fn test_late_trigger_wins() {
        // Capacity 1: a shell that was busy only sees the latest chain
        let signal = ReloadSignal::new();
        let mut rx = signal.subscribe();
        signal.trigger(ChainId(1));
        signal.trigger(ChainId(84532));

        match rx.recv().await {
            Ok(chain_id) => assert_eq!(chain_id, ChainId(84532)),
            Err(broadcast::error::RecvError::Lagged(_)) => {
                assert_eq!(rx.recv().await.unwrap(), ChainId(84532));
            }
            Err(e) => panic!("unexpected recv error: {}", e),
        }
    }

    #[test]
    fn test_trigger_without_subscribers_is_harmless() {
        let signal = ReloadSignal::new();
        signal.trigger(ChainId(1));
        assert_eq!(signal.receiver_count(), 0);
    }
}
