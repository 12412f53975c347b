//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via config and environment (RUST_LOG wins)
//! - No metrics endpoint; the connect flow is user-paced and low-volume

pub mod logging;
