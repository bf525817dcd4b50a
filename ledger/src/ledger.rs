//! Aggregated recipient ledger.
//!
//! One entry per distinct recipient; crediting an existing recipient adds to
//! its balance instead of replacing it.

use std::collections::btree_map::{self, BTreeMap};

use multisend_types::{AccountId, RawAmount};
use serde::Serialize;

/// Accumulated amount per recipient.
///
/// Iteration order is sorted by account id, so the same ledger always yields
/// the same sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregatedLedger {
    balances: BTreeMap<AccountId, RawAmount>,
}

impl AggregatedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `recipient`, inserting it if absent.
    pub fn credit(&mut self, recipient: AccountId, amount: &RawAmount) {
        match self.balances.entry(recipient) {
            btree_map::Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            btree_map::Entry::Vacant(entry) => {
                entry.insert(amount.clone());
            }
        }
    }

    pub fn get(&self, recipient: &AccountId) -> Option<&RawAmount> {
        self.balances.get(recipient)
    }

    /// Number of distinct recipients.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, AccountId, RawAmount> {
        self.balances.iter()
    }

    /// Sum of all balances.
    pub fn sum(&self) -> RawAmount {
        self.balances.values().sum()
    }
}

impl<'a> IntoIterator for &'a AggregatedLedger {
    type Item = (&'a AccountId, &'a RawAmount);
    type IntoIter = btree_map::Iter<'a, AccountId, RawAmount>;

    fn into_iter(self) -> Self::IntoIter {
        self.balances.iter()
    }
}

impl FromIterator<(AccountId, RawAmount)> for AggregatedLedger {
    fn from_iter<I: IntoIterator<Item = (AccountId, RawAmount)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (recipient, amount) in iter {
            ledger.credit(recipient, &amount);
        }
        ledger
    }
}

/// The result of one full parse: the ledger plus the grand total.
///
/// Every parse produces a fresh value; nothing is carried over from a
/// previous parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRecipients {
    ledger: AggregatedLedger,
    total: RawAmount,
}

impl ParsedRecipients {
    /// Pair a ledger with its total, computed from the ledger's balances.
    pub fn from_ledger(ledger: AggregatedLedger) -> Self {
        let total = ledger.sum();
        Self { ledger, total }
    }

    pub(crate) fn from_parts(ledger: AggregatedLedger, total: RawAmount) -> Self {
        debug_assert_eq!(ledger.sum(), total);
        Self { ledger, total }
    }

    pub fn ledger(&self) -> &AggregatedLedger {
        &self.ledger
    }

    /// Sum of every accepted amount, repeats included.
    pub fn total(&self) -> &RawAmount {
        &self.total
    }

    /// No valid pair was found in the text.
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Whether a submission could be built from this result.
    pub fn can_submit(&self) -> bool {
        !self.is_empty()
    }

    pub fn into_parts(self) -> (AggregatedLedger, RawAmount) {
        (self.ledger, self.total)
    }
}
