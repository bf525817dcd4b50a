//! Single transfer instructions and the contract-call argument wrapper.

use multisend_types::{AccountId, OnChainAmount};
use serde::{Deserialize, Serialize};

/// One transfer inside a batch: pay `amount` on-chain units to `account_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub account_id: AccountId,
    pub amount: OnChainAmount,
}

impl Operation {
    pub fn new(account_id: AccountId, amount: OnChainAmount) -> Self {
        Self { account_id, amount }
    }
}

/// Arguments of the contract's `send` method: `{"operations": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendArgs {
    pub operations: Vec<Operation>,
}

impl SendArgs {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "operations": self.operations })
    }
}
