use multisend_types::{AccountIdError, AmountError, OnChainAmount};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    #[error("invalid recipient: {0}")]
    InvalidRecipient(#[from] AccountIdError),

    #[error("no valid recipient/amount pairs to send")]
    EmptyBatch,

    #[error("operation for {recipient} has a zero amount")]
    ZeroAmount { recipient: String },

    #[error("deposit {deposit} does not equal the sum of operations {operations}")]
    DepositMismatch {
        deposit: OnChainAmount,
        operations: OnChainAmount,
    },
}
