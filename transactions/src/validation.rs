//! Batch validation logic.

use multisend_types::OnChainAmount;

use crate::batch::BatchRequest;
use crate::error::BatchError;

/// Check a batch's internal consistency before it leaves the process.
///
/// - at least one operation
/// - no zero-amount operation
/// - deposit equals the sum of operation amounts
pub fn validate_batch(batch: &BatchRequest) -> Result<(), BatchError> {
    if batch.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    if let Some(op) = batch.operations().iter().find(|op| op.amount.is_zero()) {
        return Err(BatchError::ZeroAmount {
            recipient: op.account_id.to_string(),
        });
    }

    let operations: OnChainAmount = batch.operations().iter().map(|op| &op.amount).sum();
    if &operations != batch.deposit() {
        return Err(BatchError::DepositMismatch {
            deposit: batch.deposit().clone(),
            operations,
        });
    }

    Ok(())
}
