//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::chain::{ChainDescriptor, ChainId, NativeCurrency};

/// Root configuration for the wallet core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Target network settings.
    pub chain: ChainConfig,

    /// Connection flow settings.
    pub connect: ConnectConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Target network configuration.
///
/// Config-file representation of the network; [`ChainConfig::descriptor`]
/// produces the wire shape the wallet API consumes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Numeric chain identifier.
    pub chain_id: u64,

    /// Human-readable network name.
    pub name: String,

    /// Native currency name.
    pub currency_name: String,

    /// Native currency ticker symbol.
    pub currency_symbol: String,

    /// Native currency decimal precision.
    pub currency_decimals: u8,

    /// RPC endpoint URLs.
    pub rpc_urls: Vec<String>,

    /// Block explorer URLs.
    pub explorer_urls: Vec<String>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        let desc = ChainDescriptor::base_sepolia();
        Self {
            chain_id: desc.chain_id.0,
            name: desc.chain_name,
            currency_name: desc.native_currency.name,
            currency_symbol: desc.native_currency.symbol,
            currency_decimals: desc.native_currency.decimals,
            rpc_urls: desc.rpc_urls,
            explorer_urls: desc.block_explorer_urls,
        }
    }
}

impl ChainConfig {
    /// Build the wire descriptor for this network.
    pub fn descriptor(&self) -> ChainDescriptor {
        ChainDescriptor {
            chain_id: ChainId(self.chain_id),
            chain_name: self.name.clone(),
            native_currency: NativeCurrency {
                name: self.currency_name.clone(),
                symbol: self.currency_symbol.clone(),
                decimals: self.currency_decimals,
            },
            rpc_urls: self.rpc_urls.clone(),
            block_explorer_urls: self.explorer_urls.clone(),
        }
    }
}

/// Connection flow configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectConfig {
    /// Maximum consecutive failed connection attempts before refusing further
    /// attempts (default: 3).
    pub max_attempts: u32,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing filter directive used when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "regen_wallet=info".to_string(),
        }
    }
}
