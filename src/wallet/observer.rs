//! Account and chain change observation.

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::lifecycle::ReloadSignal;
use crate::wallet::provider::{ProviderEvent, WalletProvider};
use crate::wallet::session::WalletSession;

/// Long-lived watcher over a wallet handle's event stream.
///
/// One watcher per shell, registered once for the process lifetime; there is
/// no unsubscribe. Events are consumed by a single task, so callback
/// invocations are serialized in emission order.
pub struct AccountWatcher;

impl AccountWatcher {
    /// Spawn the watcher task.
    ///
    /// On an account change the callback receives the new primary account, or
    /// `None` when the account list is empty (disconnection). On a chain
    /// change the stored handle is cleared, the attempt counter reset, and
    /// the reload signal triggered: provider objects bound to a prior chain
    /// are not safely reusable, so the shell must rebuild from scratch.
    pub fn spawn<F>(
        provider: Arc<dyn WalletProvider>,
        session: Arc<WalletSession>,
        reload: ReloadSignal,
        on_account: F,
    ) -> JoinHandle<()>
    where
        F: Fn(Option<Address>) + Send + 'static,
    {
        let mut events = provider.subscribe();

        tokio::spawn(async move {
            tracing::debug!("Account watcher started");

            loop {
                match events.recv().await {
                    Ok(ProviderEvent::AccountsChanged(accounts)) => {
                        let primary = accounts.first().copied();
                        match primary {
                            Some(address) => {
                                tracing::info!(address = %address, "Active account changed")
                            }
                            None => tracing::warn!("Wallet disconnected"),
                        }
                        on_account(primary);
                    }
                    Ok(ProviderEvent::ChainChanged(chain_id)) => {
                        tracing::info!(chain_id = %chain_id, "Chain changed, forcing reload");
                        session.clear_provider();
                        session.attempts().reset();
                        reload.trigger(chain_id);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Account watcher lagged behind handle events");
                    }
                    Err(RecvError::Closed) => {
                        tracing::debug!("Handle event stream closed, watcher stopping");
                        break;
                    }
                }
            }
        })
    }
}
