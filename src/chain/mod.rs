//! Target network identity and description.
//!
//! # Data Flow
//! ```text
//! config file (chain section)
//!     → ChainConfig (validated)
//!     → ChainDescriptor (wire shape for wallet_addEthereumChain)
//!     → negotiator (switch/add requests against the wallet handle)
//! ```
//!
//! # Design Decisions
//! - Chain ids travel as 0x-prefixed hex strings on the wire, u64 in memory
//! - The descriptor is immutable for the process lifetime
//! - Serde field names match the EIP-3085 parameter object exactly

pub mod descriptor;

pub use descriptor::{ChainDescriptor, ChainId, NativeCurrency};
