//! Recipient list parsing and aggregation.
//!
//! Turns pasted free-form text into one accumulated amount per recipient plus
//! a grand total. Parsing is tolerant: fragments that are not a recipient
//! followed by a positive amount are ignored rather than reported.

pub mod ledger;
pub mod parser;

pub use ledger::{AggregatedLedger, ParsedRecipients};
pub use parser::{parse_recipients, scan, Candidate, SkipReason};
