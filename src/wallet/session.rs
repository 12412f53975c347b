//! Shared connection state.

use std::sync::{Arc, Mutex};

use crate::wallet::guard::AttemptGuard;
use crate::wallet::provider::WalletProvider;

/// Single-instance connection context, injected into the connector and the
/// observer.
///
/// Holds at most one active provider handle plus the attempt guard. The handle
/// is cleared on chain change or explicit reset; the guard is reset on
/// successful connect, user rejection, missing wallet, and chain change.
pub struct WalletSession {
    provider: Mutex<Option<Arc<dyn WalletProvider>>>,
    attempts: AttemptGuard,
}

impl WalletSession {
    /// Create a session whose guard allows `max_attempts` attempts.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            provider: Mutex::new(None),
            attempts: AttemptGuard::new(max_attempts),
        }
    }

    /// The currently stored provider handle, if any.
    pub fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.lock_provider().clone()
    }

    /// Store the active provider handle.
    pub fn store_provider(&self, provider: Arc<dyn WalletProvider>) {
        *self.lock_provider() = Some(provider);
    }

    /// Drop the stored provider handle.
    pub fn clear_provider(&self) {
        *self.lock_provider() = None;
    }

    /// The slot only ever holds plain pointer assignments, so a poisoned lock
    /// still contains a usable value; recover it instead of panicking.
    fn lock_provider(&self) -> std::sync::MutexGuard<'_, Option<Arc<dyn WalletProvider>>> {
        self.provider
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The attempt guard.
    pub fn attempts(&self) -> &AttemptGuard {
        &self.attempts
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new(AttemptGuard::default().max())
    }
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("has_provider", &self.provider().is_some())
            .field("attempts", &self.attempts)
            .finish()
    }
}
