//! Tolerant recipient/amount text parser.
//!
//! The whole text is scanned with one pattern, not line by line: a recipient
//! made of `[-_0-9a-zA-Z.]` followed by an amount of digits and dots,
//! optionally separated by one of `,` `|` `=` and/or spaces and tabs.
//! Matches are non-overlapping and leftmost-first, so pairs may appear
//! anywhere, several per line, or with stray text between them.
//!
//! Anything that does not yield a non-empty recipient and a positive amount
//! is skipped silently.

use lazy_static::lazy_static;
use multisend_types::{AccountId, AmountError, RawAmount};
use regex::Regex;

use crate::ledger::{AggregatedLedger, ParsedRecipients};

lazy_static! {
    static ref PAIR_PATTERN: Regex =
        Regex::new(r"([-_0-9a-zA-Z.]*)[ \t]*[,|=]?[ \t]*([0-9.]+)")
            .expect("pair pattern is a valid regex");
}

/// One raw match in the input text, before any validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub recipient: &'a str,
    pub amount: &'a str,
    /// Byte range of the whole match in the input.
    pub span: std::ops::Range<usize>,
}

/// Why a candidate did not make it into the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyRecipient,
    ZeroAmount,
    UnparsableAmount(AmountError),
}

impl<'a> Candidate<'a> {
    /// Validate into a ledger entry.
    pub fn accept(&self) -> Result<(AccountId, RawAmount), SkipReason> {
        let recipient = AccountId::new(self.recipient).map_err(|_| SkipReason::EmptyRecipient)?;
        let amount =
            RawAmount::parse_decimal(self.amount).map_err(SkipReason::UnparsableAmount)?;
        if amount.is_zero() {
            return Err(SkipReason::ZeroAmount);
        }
        Ok((recipient, amount))
    }
}

/// Every candidate pair in `text`, in order of appearance.
pub fn scan(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    PAIR_PATTERN.captures_iter(text).map(|caps| {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        Candidate {
            recipient: caps.get(1).map_or("", |m| m.as_str()),
            amount: caps.get(2).map_or("", |m| m.as_str()),
            span: whole,
        }
    })
}

/// Parse free-form text into an aggregated ledger and grand total.
///
/// Pure and deterministic: the same text always gives the same result.
pub fn parse_recipients(text: &str) -> ParsedRecipients {
    let mut ledger = AggregatedLedger::new();
    let mut total = RawAmount::zero();
    let mut skipped = 0usize;

    for candidate in scan(text) {
        match candidate.accept() {
            Ok((recipient, amount)) => {
                total += &amount;
                ledger.credit(recipient, &amount);
            }
            Err(reason) => {
                skipped += 1;
                tracing::trace!(
                    recipient = candidate.recipient,
                    amount = candidate.amount,
                    ?reason,
                    "skipping fragment"
                );
            }
        }
    }

    tracing::debug!(
        recipients = ledger.len(),
        skipped,
        %total,
        "parsed recipient list"
    );
    ParsedRecipients::from_parts(ledger, total)
}
