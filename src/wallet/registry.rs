//! Detected wallet handle registry.
//!
//! The host shell probes its environment once at startup and registers
//! whatever handles it finds: the shared injected handle (the one MetaMask
//! and most extensions claim) and, separately, a Coinbase-specific extension
//! handle when present.

use std::sync::{Arc, Mutex};

use crate::wallet::provider::WalletProvider;
use crate::wallet::types::{ConnectError, ConnectResult, WalletKind};

/// Slots for the wallet handles detected in the host environment.
#[derive(Default)]
pub struct ProviderRegistry {
    /// The shared injected handle.
    injected: Mutex<Option<Arc<dyn WalletProvider>>>,
    /// Coinbase Wallet's own extension handle, distinct from the shared one.
    coinbase_extension: Mutex<Option<Arc<dyn WalletProvider>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the shared injected handle.
    pub fn register_injected(&self, provider: Arc<dyn WalletProvider>) {
        *lock_slot(&self.injected) = Some(provider);
    }

    /// Register the Coinbase extension handle.
    pub fn register_coinbase_extension(&self, provider: Arc<dyn WalletProvider>) {
        *lock_slot(&self.coinbase_extension) = Some(provider);
    }

    /// The shared injected handle, if detected.
    pub fn injected(&self) -> Option<Arc<dyn WalletProvider>> {
        lock_slot(&self.injected).clone()
    }

    /// The Coinbase extension handle, if detected.
    pub fn coinbase_extension(&self) -> Option<Arc<dyn WalletProvider>> {
        lock_slot(&self.coinbase_extension).clone()
    }

    /// Locate the handle for `kind` and apply its identity predicate.
    ///
    /// - MetaMask: the shared handle, which must self-identify as MetaMask.
    /// - Coinbase: the shared handle if present (must self-identify as
    ///   Coinbase), otherwise the dedicated extension handle.
    /// - Manual: the shared handle with no identity predicate (reached only
    ///   when no manual address was supplied).
    pub fn resolve(&self, kind: WalletKind) -> ConnectResult<Arc<dyn WalletProvider>> {
        match kind {
            WalletKind::MetaMask => {
                let handle = self
                    .injected()
                    .ok_or(ConnectError::WalletNotInstalled(kind))?;
                if !handle.is_metamask() {
                    return Err(ConnectError::WrongWalletSelected(kind));
                }
                Ok(handle)
            }
            WalletKind::Coinbase => match self.injected() {
                Some(handle) => {
                    if !handle.is_coinbase_wallet() {
                        return Err(ConnectError::WrongWalletSelected(kind));
                    }
                    Ok(handle)
                }
                None => self
                    .coinbase_extension()
                    .ok_or(ConnectError::WalletNotInstalled(kind)),
            },
            WalletKind::Manual => self
                .injected()
                .ok_or(ConnectError::WalletNotInstalled(kind)),
        }
    }
}

/// A slot only ever holds plain pointer assignments, so a poisoned lock still
/// contains a usable value; recover it instead of panicking.
fn lock_slot<'a>(
    slot: &'a Mutex<Option<Arc<dyn WalletProvider>>>,
) -> std::sync::MutexGuard<'a, Option<Arc<dyn WalletProvider>>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("injected", &self.injected().is_some())
            .field("coinbase_extension", &self.coinbase_extension().is_some())
            .finish()
    }
}
