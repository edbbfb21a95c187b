//! Linea Core
//!
//! Shared plumbing for the Linea charting crates: logging bootstrap,
//! profiling hooks, hash collections and runtime config.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;
