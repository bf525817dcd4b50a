//! Batch assembly: aggregated balances → operations + deposit + gas.

use multisend_ledger::{AggregatedLedger, ParsedRecipients};
use multisend_types::{to_on_chain_units, AccountId, OnChainAmount, RawAmount};
use serde::Serialize;

use crate::error::BatchError;
use crate::operation::{Operation, SendArgs};
use crate::validation::validate_batch;

/// Gas attached to a batch call: 300 Tgas, the per-transaction maximum.
///
/// Fixed rather than derived from the number of operations, so a very large
/// batch can run out of gas on chain.
pub const DEFAULT_GAS: u64 = 300_000_000_000_000;

/// Everything one multi-recipient transfer call needs.
///
/// Built once by [`BatchBuilder`], never modified, and consumed by value when
/// submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    operations: Vec<Operation>,
    deposit: OnChainAmount,
    gas: u64,
}

impl BatchRequest {
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Total value attached to the call.
    pub fn deposit(&self) -> &OnChainAmount {
        &self.deposit
    }

    pub fn gas(&self) -> u64 {
        self.gas
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Split into the contract arguments, gas and deposit.
    pub fn into_parts(self) -> (SendArgs, u64, OnChainAmount) {
        (
            SendArgs {
                operations: self.operations,
            },
            self.gas,
            self.deposit,
        )
    }
}

/// Turns parsed recipients into a [`BatchRequest`].
#[derive(Clone, Copy, Debug)]
pub struct BatchBuilder {
    gas: u64,
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self { gas: DEFAULT_GAS }
    }
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the gas budget.
    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = gas;
        self
    }

    pub fn gas(&self) -> u64 {
        self.gas
    }

    /// Build from a parse result.
    ///
    /// One operation per ledger entry, in ledger order. The deposit is
    /// converted from the grand total on its own, then checked against the
    /// sum of the operations.
    pub fn build(&self, parsed: &ParsedRecipients) -> Result<BatchRequest, BatchError> {
        self.assemble(parsed.ledger(), parsed.total())
    }

    /// Build from a bare ledger, taking its balance sum as the grand total.
    pub fn build_from_ledger(&self, ledger: &AggregatedLedger) -> Result<BatchRequest, BatchError> {
        self.assemble(ledger, &ledger.sum())
    }

    /// Build from explicit `(recipient, amount)` strings.
    ///
    /// Unlike text parsing this is strict: the first bad recipient or amount
    /// aborts the whole build. Zero amounts are dropped, repeats accumulate.
    pub fn build_strict<'a, I>(&self, entries: I) -> Result<BatchRequest, BatchError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ledger = AggregatedLedger::new();
        for (recipient, amount) in entries {
            let recipient = AccountId::new(recipient)?;
            let amount = RawAmount::parse_decimal(amount)?;
            if !amount.is_zero() {
                ledger.credit(recipient, &amount);
            }
        }
        self.build_from_ledger(&ledger)
    }

    fn assemble(
        &self,
        ledger: &AggregatedLedger,
        total: &RawAmount,
    ) -> Result<BatchRequest, BatchError> {
        if ledger.is_empty() {
            return Err(BatchError::EmptyBatch);
        }

        let operations: Vec<Operation> = ledger
            .iter()
            .map(|(recipient, amount)| Operation::new(recipient.clone(), to_on_chain_units(amount)))
            .collect();

        let request = BatchRequest {
            operations,
            deposit: to_on_chain_units(total),
            gas: self.gas,
        };
        validate_batch(&request)?;

        tracing::debug!(
            operations = request.len(),
            deposit = %request.deposit,
            gas = request.gas,
            "built batch"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multisend_ledger::parse_recipients;

    fn e24(tokens: u64) -> OnChainAmount {
        format!("{tokens}{}", "0".repeat(24)).parse().unwrap()
    }

    #[test]
    fn end_to_end_three_accounts() {
        let parsed = parse_recipients("acct1 10\nacct2 30\nacct3 40");
        let batch = BatchBuilder::new().build(&parsed).unwrap();

        let ops: Vec<(&str, &OnChainAmount)> = batch
            .operations()
            .iter()
            .map(|op| (op.account_id.as_str(), &op.amount))
            .collect();
        assert_eq!(
            ops,
            [("acct1", &e24(10)), ("acct2", &e24(30)), ("acct3", &e24(40))]
        );
        assert_eq!(batch.deposit(), &e24(80));
        assert_eq!(batch.gas(), DEFAULT_GAS);
    }

    #[test]
    fn empty_ledger_is_refused() {
        let parsed = parse_recipients("nothing to see here");
        assert!(matches!(
            BatchBuilder::new().build(&parsed),
            Err(BatchError::EmptyBatch)
        ));
    }

    #[test]
    fn gas_is_configurable() {
        let parsed = parse_recipients("alice 1");
        let batch = BatchBuilder::new().with_gas(42).build(&parsed).unwrap();
        assert_eq!(batch.gas(), 42);
    }

    #[test]
    fn order_is_stable_for_a_ledger() {
        let parsed = parse_recipients("zed 1\nalice 2\nmike 3\nalice 4");
        let builder = BatchBuilder::new();
        let first = builder.build(&parsed).unwrap();
        let second = builder.build(&parsed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fractional_amounts_are_exact() {
        let parsed = parse_recipients("alice 0.1\nbob 0.2");
        let batch = BatchBuilder::new().build(&parsed).unwrap();
        assert_eq!(batch.deposit().to_string(), format!("3{}", "0".repeat(23)));
    }

    #[test]
    fn strict_build_aborts_on_negative_amount() {
        let result = BatchBuilder::new().build_strict([("alice", "5"), ("bob", "-1")]);
        assert!(matches!(result, Err(BatchError::InvalidAmount(_))));
    }

    #[test]
    fn strict_build_aborts_on_bad_recipient() {
        let result = BatchBuilder::new().build_strict([("not valid", "5")]);
        assert!(matches!(result, Err(BatchError::InvalidRecipient(_))));
    }

    #[test]
    fn strict_build_aggregates_and_drops_zero() {
        let batch = BatchBuilder::new()
            .build_strict([("alice", "1"), ("bob", "0"), ("alice", "2")])
            .unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.deposit(), &e24(3));
    }

    #[test]
    fn into_parts_hands_over_everything() {
        let parsed = parse_recipients("alice 2");
        let batch = BatchBuilder::new().build(&parsed).unwrap();
        let (args, gas, deposit) = batch.into_parts();
        assert_eq!(args.operations.len(), 1);
        assert_eq!(gas, DEFAULT_GAS);
        assert_eq!(deposit, e24(2));
    }
}
