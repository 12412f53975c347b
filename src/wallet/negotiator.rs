//! Switch-or-register chain negotiation.
//!
//! The wallet API distinguishes "network configured but inactive" from
//! "network never configured" via distinct error codes; only the latter (4902)
//! permits silent registration with `wallet_addEthereumChain`.

use serde_json::json;

use crate::chain::ChainDescriptor;
use crate::wallet::provider::{methods, WalletProvider};
use crate::wallet::types::{ConnectError, ConnectResult};

/// Ensure the handle's active network is `chain`.
///
/// Issues a switch request; on an unrecognized-chain response, registers the
/// descriptor instead. Registration success is taken to imply the switch took
/// effect, matching the wallet API's own guarantee; the switch is not
/// re-verified afterwards.
pub async fn ensure_chain(
    provider: &dyn WalletProvider,
    chain: &ChainDescriptor,
) -> ConnectResult<()> {
    let switch_params = json!([{ "chainId": chain.chain_id }]);

    match provider.request(methods::SWITCH_CHAIN, switch_params).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_user_rejected() => {
            tracing::warn!(chain_id = %chain.chain_id, "User declined network switch");
            Err(ConnectError::ChainSwitchDeclined)
        }
        Err(err) if err.is_unrecognized_chain() => {
            tracing::info!(
                chain_id = %chain.chain_id,
                chain_name = %chain.chain_name,
                "Chain not configured in wallet, registering"
            );
            register_chain(provider, chain).await
        }
        Err(err) => {
            tracing::warn!(chain_id = %chain.chain_id, error = %err, "Network switch failed");
            Err(ConnectError::ChainSwitchFailed)
        }
    }
}

async fn register_chain(
    provider: &dyn WalletProvider,
    chain: &ChainDescriptor,
) -> ConnectResult<()> {
    let add_params = json!([chain]);

    match provider.request(methods::ADD_CHAIN, add_params).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_user_rejected() => {
            tracing::warn!(chain_id = %chain.chain_id, "User declined adding network");
            Err(ConnectError::ChainAddDeclined)
        }
        Err(err) => {
            tracing::warn!(chain_id = %chain.chain_id, error = %err, "Adding network failed");
            Err(ConnectError::ChainAddFailed)
        }
    }
}
