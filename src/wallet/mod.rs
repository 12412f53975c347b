//! Wallet connection subsystem.
//!
//! # Data Flow
//! ```text
//! Shell registers detected handles
//!     → registry.rs (kind-specific lookup + identity predicates)
//!     → connector.rs (attempt guard, session, account authorization)
//!     → negotiator.rs (switch-or-register chain protocol)
//!
//! Handle events
//!     → observer.rs (account change → callback, chain change → hard reset)
//! ```
//!
//! # Invariants
//! - At most one outstanding connect call at a time (caller enforced)
//! - The attempt counter never exceeds its configured maximum
//! - Only the connector and observer mutate the shared session

pub mod address;
pub mod connector;
pub mod guard;
pub mod negotiator;
pub mod observer;
pub mod provider;
pub mod registry;
pub mod session;
pub mod types;

pub use connector::WalletConnector;
pub use guard::AttemptGuard;
pub use observer::AccountWatcher;
pub use provider::{ProviderError, ProviderEvent, WalletProvider};
pub use registry::ProviderRegistry;
pub use session::WalletSession;
pub use types::{ConnectError, ConnectOutcome, ConnectResult, WalletKind};
