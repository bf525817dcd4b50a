//! Nullable infrastructure for deterministic testing.
//!
//! The sender's external collaborators (sign-in session, contract calls) are
//! abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod contract;
pub mod session;

pub use contract::NullContract;
pub use session::NullSession;
