//! Wallet-kind and connection error definitions.

use alloy::primitives::Address;
use thiserror::Error;

use crate::wallet::provider::ProviderError;

/// The kind of wallet the user picked in the connection dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletKind {
    /// The shared injected extension handle (MetaMask).
    MetaMask,
    /// Coinbase Wallet, via the shared handle or its own extension handle.
    Coinbase,
    /// A user-typed address; no wallet-handle interaction when supplied.
    Manual,
}

impl std::fmt::Display for WalletKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletKind::MetaMask => write!(f, "MetaMask"),
            WalletKind::Coinbase => write!(f, "Coinbase Wallet"),
            WalletKind::Manual => write!(f, "manual entry"),
        }
    }
}

/// Result of a connection attempt that did not fail outright.
///
/// A user declining the authorization prompt is a deliberate choice, not an
/// error, so it gets its own variant instead of an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The wallet authorized this account.
    Connected(Address),
    /// The user declined the authorization prompt.
    Declined,
}

impl ConnectOutcome {
    /// The authorized account, if any.
    pub fn account(&self) -> Option<Address> {
        match self {
            ConnectOutcome::Connected(addr) => Some(*addr),
            ConnectOutcome::Declined => None,
        }
    }
}

/// Errors that can occur during the connection flow.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// No handle of the requested kind is present.
    #[error("no wallet extension found for {0}; please install it to continue")]
    WalletNotInstalled(WalletKind),

    /// A handle is present but does not identify as the requested kind.
    #[error("the active wallet extension is not {0}")]
    WrongWalletSelected(WalletKind),

    /// The user declined switching to the target network.
    #[error("network switch declined; please switch to the target network to continue")]
    ChainSwitchDeclined,

    /// The user declined registering the target network.
    #[error("adding the network was declined; please add the target network to continue")]
    ChainAddDeclined,

    /// Registering the network failed for a non-decline reason.
    #[error("failed to add the target network to the wallet")]
    ChainAddFailed,

    /// Switching failed for a non-decline, non-unrecognized reason.
    #[error("failed to switch the wallet to the target network")]
    ChainSwitchFailed,

    /// The handle returned zero accounts.
    #[error("no accounts found; the wallet may be locked")]
    NoAccountsFound,

    /// The attempt counter is at its configured maximum.
    #[error("maximum connection attempts reached; please try again later")]
    TooManyAttempts,

    /// Any other handle failure, propagated unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ConnectError {
    /// Whether this failure resets the attempt counter.
    ///
    /// Only a missing wallet qualifies: the wallet software itself is absent,
    /// so a later correctly-configured retry should not be penalized by a
    /// stale counter.
    pub fn resets_attempts(&self) -> bool {
        matches!(self, ConnectError::WalletNotInstalled(_))
    }
}

/// Result type for connection operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_kind_display() {
        assert_eq!(WalletKind::MetaMask.to_string(), "MetaMask");
        assert_eq!(WalletKind::Coinbase.to_string(), "Coinbase Wallet");
        assert_eq!(WalletKind::Manual.to_string(), "manual entry");
    }

    #[test]
    fn test_error_display() {
        let err = ConnectError::WalletNotInstalled(WalletKind::MetaMask);
        assert!(err.to_string().contains("MetaMask"));

        let err = ConnectError::TooManyAttempts;
        assert!(err.to_string().contains("maximum connection attempts"));
    }

    #[test]
    fn test_only_missing_wallet_resets_attempts() {
        assert!(ConnectError::WalletNotInstalled(WalletKind::Coinbase).resets_attempts());
        assert!(!ConnectError::WrongWalletSelected(WalletKind::MetaMask).resets_attempts());
        assert!(!ConnectError::TooManyAttempts.resets_attempts());
        assert!(!ConnectError::ChainSwitchDeclined.resets_attempts());
    }

    #[test]
    fn test_outcome_account() {
        let addr = Address::ZERO;
        assert_eq!(ConnectOutcome::Connected(addr).account(), Some(addr));
        assert_eq!(ConnectOutcome::Declined.account(), None);
    }
}
