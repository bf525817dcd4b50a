//! Fundamental types for multisend.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! human token amounts, exact on-chain amounts and the conversion between them,
//! recipient account ids and network identifiers.

pub mod account;
pub mod amount;
pub mod convert;
pub mod error;
pub mod network;

pub use account::AccountId;
pub use amount::{OnChainAmount, RawAmount, DISPLAY_DECIMALS, ON_CHAIN_DECIMALS};
pub use convert::{parse_on_chain_units, to_on_chain_units};
pub use error::{AccountIdError, AmountError};
pub use network::NetworkId;
