//! Shared utilities for multisend.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
