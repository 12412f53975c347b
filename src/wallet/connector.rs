//! Wallet connection flow.

use std::sync::Arc;

use alloy::primitives::Address;
use serde_json::{json, Value};

use crate::chain::ChainDescriptor;
use crate::wallet::negotiator::ensure_chain;
use crate::wallet::provider::{methods, ProviderError};
use crate::wallet::registry::ProviderRegistry;
use crate::wallet::session::WalletSession;
use crate::wallet::types::{ConnectError, ConnectOutcome, ConnectResult, WalletKind};

/// Sequential connection flow: resolve a handle for the requested wallet
/// kind, negotiate the target network, and request account authorization.
///
/// Not self-guarding against concurrent invocation; the caller disables
/// re-entry while a connect is pending.
pub struct WalletConnector {
    registry: Arc<ProviderRegistry>,
    session: Arc<WalletSession>,
    chain: ChainDescriptor,
}

impl WalletConnector {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        session: Arc<WalletSession>,
        chain: ChainDescriptor,
    ) -> Self {
        Self {
            registry,
            session,
            chain,
        }
    }

    /// The session this connector mutates.
    pub fn session(&self) -> &Arc<WalletSession> {
        &self.session
    }

    /// Connect a wallet of the requested kind.
    ///
    /// A manually-entered address short-circuits the whole flow: it is
    /// returned verbatim with no handle interaction and no state mutation.
    /// Format validation of manual input is the caller's responsibility
    /// (see [`crate::wallet::address::parse_manual`]).
    ///
    /// Returns [`ConnectOutcome::Declined`] when the user rejects the
    /// authorization prompt; that is a choice, not a failure, and it resets
    /// the attempt counter.
    pub async fn connect(
        &self,
        kind: WalletKind,
        manual_address: Option<Address>,
    ) -> ConnectResult<ConnectOutcome> {
        if kind == WalletKind::Manual {
            if let Some(address) = manual_address {
                tracing::info!(address = %address, "Using manually entered address");
                return Ok(ConnectOutcome::Connected(address));
            }
        }

        let guard = self.session.attempts();
        if !guard.try_acquire() {
            tracing::warn!(
                attempts = guard.current(),
                max = guard.max(),
                "Refusing connection attempt, guard exhausted"
            );
            return Err(ConnectError::TooManyAttempts);
        }

        match self.connect_inner(kind).await {
            Ok(outcome) => {
                guard.reset();
                Ok(outcome)
            }
            Err(err) => {
                if err.resets_attempts() {
                    guard.reset();
                }
                tracing::warn!(wallet = %kind, error = %err, "Wallet connection failed");
                Err(err)
            }
        }
    }

    async fn connect_inner(&self, kind: WalletKind) -> ConnectResult<ConnectOutcome> {
        let provider = self.registry.resolve(kind)?;

        self.session.store_provider(provider.clone());

        ensure_chain(provider.as_ref(), &self.chain).await?;

        match provider.request(methods::REQUEST_ACCOUNTS, json!([])).await {
            Ok(value) => {
                let accounts = decode_accounts(value)?;
                match accounts.first() {
                    Some(account) => {
                        tracing::info!(
                            address = %account,
                            wallet = %kind,
                            chain_id = %self.chain.chain_id,
                            "Wallet connected"
                        );
                        Ok(ConnectOutcome::Connected(*account))
                    }
                    None => Err(ConnectError::NoAccountsFound),
                }
            }
            Err(err) if err.is_user_rejected() => {
                tracing::info!(wallet = %kind, "User declined account authorization");
                Ok(ConnectOutcome::Declined)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn decode_accounts(value: Value) -> ConnectResult<Vec<Address>> {
    let raw: Vec<String> = serde_json::from_value(value).map_err(|e| {
        ProviderError::new(-32603, format!("malformed accounts response: {}", e))
    })?;

    raw.iter()
        .map(|s| {
            s.parse().map_err(|e| {
                ProviderError::new(-32603, format!("malformed account address '{}': {}", s, e))
                    .into()
            })
        })
        .collect()
}

impl std::fmt::Debug for WalletConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConnector")
            .field("chain_id", &self.chain.chain_id)
            .field("session", &self.session)
            .finish()
    }
}
