//! Tilefall - tile physics demos
//!
//! Application layer: layered configuration and the per-frame simulation
//! system a host loop drives.

pub mod config;
pub mod systems;
