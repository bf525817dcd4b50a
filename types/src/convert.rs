//! Exact conversion from human token amounts to on-chain units.
//!
//! `on_chain = round(amount × 10^8) × 10^16`. The rounding step happens once,
//! when text becomes a [`RawAmount`]; the scale-up here is pure big-integer
//! multiplication, so the result is exact for any amount.

use crate::amount::{OnChainAmount, RawAmount, DISPLAY_DECIMALS, ON_CHAIN_DECIMALS};
use crate::error::AmountError;

/// `10^(ON_CHAIN_DECIMALS - DISPLAY_DECIMALS)`.
const MICRO_TO_ON_CHAIN: u64 = 10_000_000_000_000_000;

const _: () = assert!(10u64.pow(ON_CHAIN_DECIMALS - DISPLAY_DECIMALS) == MICRO_TO_ON_CHAIN);

/// Scale a human amount to the chain's smallest unit.
pub fn to_on_chain_units(amount: &RawAmount) -> OnChainAmount {
    OnChainAmount::new(amount.micros() * MICRO_TO_ON_CHAIN)
}

/// Parse a decimal string and scale it to on-chain units.
///
/// Fails with [`AmountError::Negative`] or [`AmountError::NonFinite`] rather
/// than clamping.
pub fn parse_on_chain_units(amount: &str) -> Result<OnChainAmount, AmountError> {
    RawAmount::parse_decimal(amount).map(|raw| to_on_chain_units(&raw))
}

impl From<&RawAmount> for OnChainAmount {
    fn from(amount: &RawAmount) -> Self {
        to_on_chain_units(amount)
    }
}

impl TryFrom<f64> for OnChainAmount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        RawAmount::try_from(value).map(|raw| to_on_chain_units(&raw))
    }
}
