//! Submission handler: parsed recipients → one contract call.

use multisend_ledger::ParsedRecipients;
use multisend_transactions::{BatchBuilder, BatchRequest};
use multisend_types::{AccountId, NetworkId, OnChainAmount};
use serde::Serialize;

use crate::config::SenderConfig;
use crate::contract::{ContractCall, ContractCaller};
use crate::error::WalletError;
use crate::session::Session;

/// Outcome of a successful submission, with links for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    pub signer_id: AccountId,
    pub contract_id: AccountId,
    pub method_name: String,
    pub operations: usize,
    pub deposit: OnChainAmount,
    pub transaction_hash: Option<String>,
    pub signer_url: String,
    pub contract_url: String,
}

/// Builds batches and hands each one to a [`ContractCaller`].
pub struct Sender<S, C> {
    session: S,
    caller: C,
    builder: BatchBuilder,
    network: NetworkId,
    contract_id: AccountId,
    method_name: String,
}

impl<S: Session, C: ContractCaller> Sender<S, C> {
    pub fn new(config: &SenderConfig, session: S, caller: C) -> Self {
        Self {
            session,
            caller,
            builder: BatchBuilder::new().with_gas(config.gas),
            network: config.network,
            contract_id: config.contract_id.clone(),
            method_name: config.method_name.clone(),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn caller(&self) -> &C {
        &self.caller
    }

    /// Build the batch for `parsed` without sending it.
    pub fn prepare(&self, parsed: &ParsedRecipients) -> Result<BatchRequest, WalletError> {
        Ok(self.builder.build(parsed)?)
    }

    /// Build and submit in one step.
    pub async fn submit(&self, parsed: &ParsedRecipients) -> Result<SubmitReceipt, WalletError> {
        if !self.session.is_signed_in() {
            return Err(WalletError::NotSignedIn);
        }
        let batch = self.prepare(parsed)?;
        self.submit_batch(batch).await
    }

    /// Submit an already built batch. The batch is consumed.
    pub async fn submit_batch(&self, batch: BatchRequest) -> Result<SubmitReceipt, WalletError> {
        let signer_id = self
            .session
            .account_id()
            .cloned()
            .ok_or(WalletError::NotSignedIn)?;

        let operations = batch.len();
        let (args, gas, deposit) = batch.into_parts();
        let call = ContractCall {
            signer_id: signer_id.clone(),
            contract_id: self.contract_id.clone(),
            method_name: self.method_name.clone(),
            args,
            gas,
            deposit: deposit.clone(),
        };

        tracing::info!(
            signer = %signer_id,
            contract = %self.contract_id,
            method = %self.method_name,
            operations,
            deposit = %deposit,
            gas,
            "submitting batch"
        );

        let receipt = match self.caller.call(call).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(error = %e, "batch call failed");
                return Err(e);
            }
        };

        tracing::info!(tx = ?receipt.transaction_hash, "batch call succeeded");
        Ok(SubmitReceipt {
            signer_url: self.network.explorer_account_url(signer_id.as_str()),
            contract_url: self.network.explorer_account_url(self.contract_id.as_str()),
            signer_id,
            contract_id: self.contract_id.clone(),
            method_name: self.method_name.clone(),
            operations,
            deposit,
            transaction_hash: receipt.transaction_hash,
        })
    }
}
