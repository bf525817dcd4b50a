//! Nullable contract: record calls without sending them.

use std::collections::VecDeque;
use std::sync::Mutex;

use multisend_wallet_core::{CallReceipt, ContractCall, ContractCaller, WalletError};

/// A test contract that records calls instead of executing them.
///
/// Responds with queued outcomes first, then with a default receipt.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullContract {
    calls: Mutex<Vec<ContractCall>>,
    outcomes: Mutex<VecDeque<Result<CallReceipt, WalletError>>>,
}

impl NullContract {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcomes: Mutex::new(VecDeque::new()),
        }
    }

    /// Answer the next call with this receipt.
    pub fn succeed_with(&self, transaction_hash: &str) {
        self.outcomes.lock().unwrap().push_back(Ok(CallReceipt {
            transaction_hash: Some(transaction_hash.to_string()),
        }));
    }

    /// Answer the next call with this error.
    pub fn fail_with(&self, error: WalletError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Every call received so far (for assertions).
    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
        self.outcomes.lock().unwrap().clear();
    }
}

impl Default for NullContract {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractCaller for NullContract {
    async fn call(&self, call: ContractCall) -> Result<CallReceipt, WalletError> {
        self.calls.lock().unwrap().push(call);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CallReceipt::default()))
    }
}
