//! Wallet core library for multisend.
//!
//! Provides everything a front end needs to turn a parsed recipient list into
//! a submitted transfer:
//! - Session seam (who signs, are we signed in)
//! - Contract call seam and a JSON-RPC relayer implementation
//! - Submission handler producing explorer links on success
//! - TOML configuration

pub mod config;
pub mod contract;
pub mod error;
pub mod relayer;
pub mod sender;
pub mod session;

pub use config::SenderConfig;
pub use contract::{CallReceipt, ContractCall, ContractCaller};
pub use error::{WalletError, CALL_FAILED_NOTICE};
pub use relayer::RelayerClient;
pub use sender::{Sender, SubmitReceipt};
pub use session::{Session, StaticSession};
