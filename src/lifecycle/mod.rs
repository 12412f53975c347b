//! Application lifecycle coordination.

pub mod reload;

pub use reload::ReloadSignal;
