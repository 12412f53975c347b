//! Wallet connection core for the Regen Bazaar marketplace.
//!
//! # Architecture Overview
//!
//! ```text
//!   Shell (UI)                ┌─────────────────────────────────────────────┐
//!   ──────────                │                regen-wallet                  │
//!   connect(kind) ───────────▶│  ┌───────────┐      ┌───────────────────┐   │
//!                             │  │ connector │─────▶│ registry (handle  │   │
//!                             │  │           │      │ detection)        │   │
//!                             │  └─────┬─────┘      └───────────────────┘   │
//!                             │        │                                     │
//!                             │        ▼                                     │
//!                             │  ┌────────────┐     ┌───────────────────┐   │
//!                             │  │ negotiator │────▶│ WalletProvider    │◀──┼── browser
//!                             │  │ switch/add │     │ (external handle) │   │   extension
//!                             │  └────────────┘     └─────────┬─────────┘   │
//!                             │                               │ events       │
//!   on_account(addr) ◀────────┼───┌───────────┐◀──────────────┘             │
//!   reload signal   ◀─────────┼───│ observer  │                             │
//!                             │   └─────┬─────┘                             │
//!                             │         ▼                                    │
//!                             │   ┌─────────────────────────────────┐       │
//!                             │   │ session (provider slot + guard) │       │
//!                             │   └─────────────────────────────────┘       │
//!                             └─────────────────────────────────────────────┘
//! ```
//!
//! The external wallet extension is abstracted behind [`wallet::WalletProvider`];
//! anything exposing `request(method, params)` plus an event stream is
//! interchangeable, including test doubles.

// Core subsystems
pub mod chain;
pub mod config;
pub mod wallet;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use chain::{ChainDescriptor, ChainId};
pub use config::WalletConfig;
pub use lifecycle::ReloadSignal;
pub use wallet::{
    AccountWatcher, AttemptGuard, ConnectError, ConnectOutcome, ProviderRegistry, WalletConnector,
    WalletKind, WalletProvider, WalletSession,
};
