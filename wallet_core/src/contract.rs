//! Contract invocation seam.

use std::future::Future;

use multisend_transactions::SendArgs;
use multisend_types::{AccountId, OnChainAmount};
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// A single function call on the multisend contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    pub signer_id: AccountId,
    pub contract_id: AccountId,
    pub method_name: String,
    pub args: SendArgs,
    pub gas: u64,
    pub deposit: OnChainAmount,
}

/// What the chain reported back for an accepted call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReceipt {
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// Something that can execute a [`ContractCall`] and wait for the outcome.
///
/// Implementations must not retry; failures are reported once and left to
/// the caller.
pub trait ContractCaller: Send + Sync {
    fn call(
        &self,
        call: ContractCall,
    ) -> impl Future<Output = Result<CallReceipt, WalletError>> + Send;
}
