//! Batch transfer construction.
//!
//! Takes the aggregated result of parsing a recipient list and produces a
//! single [`BatchRequest`]: one [`Operation`] per recipient with its amount in
//! on-chain units, the total deposit to attach, and the gas budget.

pub mod batch;
pub mod error;
pub mod operation;
pub mod validation;

pub use batch::{BatchBuilder, BatchRequest, DEFAULT_GAS};
pub use error::BatchError;
pub use operation::{Operation, SendArgs};
pub use validation::validate_batch;
