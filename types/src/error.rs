//! Error types shared across crates.

use thiserror::Error;

/// Why a human-entered amount could not become a [`RawAmount`](crate::RawAmount).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid amount: {0} is negative")]
    Negative(String),

    #[error("invalid amount: {0} is not finite")]
    NonFinite(String),

    #[error("invalid amount: {0:?} is not a decimal number")]
    Malformed(String),
}

/// Why a string is not a usable recipient account id.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccountIdError {
    #[error("account id is empty")]
    Empty,

    #[error("account id {account:?} contains invalid character {ch:?}")]
    InvalidChar { account: String, ch: char },
}
