//! Chain descriptor types and their wire encoding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chain ID type for strong typing.
///
/// Wallet RPC methods (`wallet_switchEthereumChain`, `wallet_addEthereumChain`)
/// expect the id as a 0x-prefixed hex string, so that is the serde encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Render the id in the textual form the wallet API expects.
    pub fn to_hex(self) -> String {
        format!("0x{:x}", self.0)
    }

    /// Parse a 0x-prefixed hex chain id.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x")?;
        u64::from_str_radix(digits, 16).ok().map(Self)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ChainId::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex chain id '{}'", s)))
    }
}

/// Native currency of the target network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Immutable description of the target network.
///
/// Serializes to the exact parameter object `wallet_addEthereumChain` takes
/// (EIP-3085), so the negotiator can pass it through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// Chain identifier, hex-encoded on the wire.
    pub chain_id: ChainId,

    /// Human-readable network name.
    pub chain_name: String,

    /// Native currency descriptor.
    pub native_currency: NativeCurrency,

    /// RPC endpoint URLs.
    pub rpc_urls: Vec<String>,

    /// Block explorer URLs.
    pub block_explorer_urls: Vec<String>,
}

impl ChainDescriptor {
    /// The default target network: Base Sepolia (84532).
    pub fn base_sepolia() -> Self {
        Self {
            chain_id: ChainId(84532),
            chain_name: "Base Sepolia".to_string(),
            native_currency: NativeCurrency {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            rpc_urls: vec!["https://sepolia.base.org".to_string()],
            block_explorer_urls: vec!["https://sepolia.base.org".to_string()],
        }
    }
}
