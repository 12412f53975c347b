//! External wallet handle abstraction.
//!
//! The browser-injected wallet object exposes `request(method, params)` plus
//! `accountsChanged` / `chainChanged` event subscription (EIP-1193). The
//! connector and observer depend only on this shape; any object satisfying it
//! is interchangeable, including test doubles.

use alloy::primitives::Address;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::chain::ChainId;

/// RPC method names the connector issues against a handle.
pub mod methods {
    /// Request account authorization.
    pub const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    /// Switch the handle's active network (EIP-3326).
    pub const SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
    /// Register a network with the handle (EIP-3085).
    pub const ADD_CHAIN: &str = "wallet_addEthereumChain";
}

/// Provider error codes with defined meanings (EIP-1193 / MetaMask).
pub mod codes {
    /// The user rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// The requested chain has not been added to the wallet.
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;
}

/// Error object returned by a wallet handle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The user rejected the request (code 4001).
    pub fn user_rejected() -> Self {
        Self::new(codes::USER_REJECTED, "User rejected the request")
    }

    /// The requested chain is not configured in the wallet (code 4902).
    pub fn unrecognized_chain() -> Self {
        Self::new(codes::UNRECOGNIZED_CHAIN, "Unrecognized chain ID")
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == codes::USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == codes::UNRECOGNIZED_CHAIN
    }
}

/// Events a wallet handle emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The authorized account set changed; empty means disconnected.
    AccountsChanged(Vec<Address>),
    /// The handle's active network changed.
    ChainChanged(ChainId),
}

/// An external wallet handle.
///
/// Implementations wrap whatever transport reaches the actual extension; the
/// core only issues requests and listens for events.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Issue an RPC request against the handle.
    ///
    /// Suspension point: the call resolves when the extension (and possibly
    /// the user, via a prompt) responds. Not cancellable once issued.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Subscribe to the handle's event stream.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;

    /// Whether the handle self-identifies as MetaMask.
    fn is_metamask(&self) -> bool {
        false
    }

    /// Whether the handle self-identifies as Coinbase Wallet.
    fn is_coinbase_wallet(&self) -> bool {
        false
    }
}
