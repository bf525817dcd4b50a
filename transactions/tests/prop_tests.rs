use proptest::prelude::*;

use multisend_ledger::{parse_recipients, AggregatedLedger};
use multisend_transactions::BatchBuilder;
use multisend_types::{to_on_chain_units, AccountId, OnChainAmount, RawAmount};

proptest! {
    /// Per-operation amounts always add up to the independently converted deposit.
    #[test]
    fn deposit_matches_operations(
        entries in prop::collection::vec(("[a-z]{1,8}", 1u128..u128::MAX / 64), 1..40),
    ) {
        let ledger: AggregatedLedger = entries
            .iter()
            .map(|(name, micros)| (AccountId::new(name.clone()).unwrap(), RawAmount::from_micros(*micros)))
            .collect();
        let batch = BatchBuilder::new().build_from_ledger(&ledger).unwrap();

        let sum: OnChainAmount = batch.operations().iter().map(|op| &op.amount).sum();
        prop_assert_eq!(&sum, batch.deposit());
        prop_assert_eq!(batch.deposit(), &to_on_chain_units(&ledger.sum()));
        prop_assert_eq!(batch.len(), ledger.len());
    }

    /// Whatever the text, building either succeeds consistently or reports an empty batch.
    #[test]
    fn text_always_builds_or_is_empty(text in "[a-z0-9 .,=\n]{0,120}") {
        let parsed = parse_recipients(&text);
        match BatchBuilder::new().build(&parsed) {
            Ok(batch) => prop_assert_eq!(batch.len(), parsed.ledger().len()),
            Err(_) => prop_assert!(parsed.is_empty()),
        }
    }
}
