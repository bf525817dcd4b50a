use multisend_transactions::BatchError;
use thiserror::Error;

/// Shown to the user whenever the contract call itself fails.
pub const CALL_FAILED_NOTICE: &str = "Something went wrong! \
    Maybe you need to sign out and back in? \
    Check the logs for more info.";

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("not signed in")]
    NotSignedIn,

    #[error("session error: {0}")]
    Session(String),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("relayer RPC error: {0}")]
    Rpc(String),

    #[error("contract call rejected: {0}")]
    CallRejected(String),

    #[error("config error: {0}")]
    Config(String),
}

impl WalletError {
    /// Short message suitable for showing to an end user.
    pub fn user_notice(&self) -> String {
        match self {
            Self::NotSignedIn => "Sign in to send tokens.".to_string(),
            Self::Batch(BatchError::EmptyBatch) => {
                "Enter at least one recipient and amount.".to_string()
            }
            Self::Rpc(_) | Self::CallRejected(_) => CALL_FAILED_NOTICE.to_string(),
            other => other.to_string(),
        }
    }
}
