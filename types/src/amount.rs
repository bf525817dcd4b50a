//! Token amount types.
//!
//! Amounts are fixed-point integers backed by [`BigUint`] so that neither
//! floating-point drift nor a native integer width ever limits them.
//!
//! - [`RawAmount`] is what a user typed, held at the token's 8-decimal display precision.
//! - [`OnChainAmount`] is the indivisible unit the chain accounts in, 10^24 per token.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmountError;

/// Fractional digits a human amount is kept at.
pub const DISPLAY_DECIMALS: u32 = 8;

/// Fractional digits of one whole token in on-chain units.
pub const ON_CHAIN_DECIMALS: u32 = 24;

/// `10^DISPLAY_DECIMALS`, the number of micro-units in one token.
const MICROS_PER_TOKEN: u64 = 100_000_000;

/// A non-negative human token amount.
///
/// Internally stored as an integer count of micro-units (10^-8 token), so every
/// value is exact and addition never rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawAmount(BigUint);

impl RawAmount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Build an amount from a count of micro-units (10^-8 token).
    pub fn from_micros(micros: impl Into<BigUint>) -> Self {
        Self(micros.into())
    }

    /// Whole tokens, no fraction.
    pub fn from_tokens(tokens: u64) -> Self {
        Self(BigUint::from(tokens) * MICROS_PER_TOKEN)
    }

    /// The amount as a count of micro-units.
    pub fn micros(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a decimal string, rounding half-up to [`DISPLAY_DECIMALS`].
    ///
    /// Accepts an optional sign, digits and at most one decimal point
    /// (`"10"`, `"0.5"`, `".5"`, `"7."`). Negative values and the textual
    /// non-finite forms (`NaN`, `inf`, `Infinity`) are rejected.
    pub fn parse_decimal(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if is_non_finite(body) {
            return Err(AmountError::NonFinite(input.to_string()));
        }

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(AmountError::Malformed(input.to_string()));
        }

        if negative && body.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            return Err(AmountError::Negative(input.to_string()));
        }

        let scale = DISPLAY_DECIMALS as usize;
        let mut digits = String::with_capacity(int_part.len() + scale + 1);
        digits.push('0');
        digits.push_str(int_part);
        digits.extend(frac_part.chars().chain(std::iter::repeat('0')).take(scale));

        let mut micros = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| AmountError::Malformed(input.to_string()))?;

        // Half-up on the first dropped digit.
        if frac_part.as_bytes().get(scale).is_some_and(|d| *d >= b'5') {
            micros += 1u32;
        }

        Ok(Self(micros))
    }
}

fn is_non_finite(body: &str) -> bool {
    ["nan", "inf", "infinity"]
        .iter()
        .any(|word| body.eq_ignore_ascii_case(word))
}

impl FromStr for RawAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}

impl TryFrom<f64> for RawAmount {
    type Error = AmountError;

    /// Converts through the float's shortest exact decimal rendering, so
    /// `0.1` becomes exactly 0.1 tokens rather than its binary approximation.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite(value.to_string()));
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value.to_string()));
        }
        Self::parse_decimal(&value.abs().to_string())
    }
}

impl Add for RawAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<'a> AddAssign<&'a RawAmount> for RawAmount {
    fn add_assign(&mut self, rhs: &'a RawAmount) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a RawAmount> for RawAmount {
    fn sum<I: Iterator<Item = &'a RawAmount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, amount| {
            acc += amount;
            acc
        })
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fixed(&self.0, DISPLAY_DECIMALS))
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An exact amount in the chain's smallest unit.
///
/// Travels as a decimal string on the wire since it routinely exceeds `u64`
/// and, for large batches, `u128`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OnChainAmount(BigUint);

impl OnChainAmount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn new(units: impl Into<BigUint>) -> Self {
        Self(units.into())
    }

    pub fn units(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Render as whole tokens with trailing zeros trimmed, e.g. `"1.5"`.
    pub fn to_token_string(&self) -> String {
        format_fixed(&self.0, ON_CHAIN_DECIMALS)
    }
}

impl FromStr for OnChainAmount {
    type Err = AmountError;

    /// Parses a plain unsigned integer string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| AmountError::Malformed(s.to_string()))
    }
}

impl Add for OnChainAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sum<&'a OnChainAmount> for OnChainAmount {
    fn sum<I: Iterator<Item = &'a OnChainAmount>>(iter: I) -> Self {
        Self(iter.fold(BigUint::zero(), |acc, amount| acc + &amount.0))
    }
}

impl fmt::Display for OnChainAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for OnChainAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OnChainAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Format an integer holding `decimals` fractional digits as a trimmed decimal.
fn format_fixed(value: &BigUint, decimals: u32) -> String {
    let digits = value.to_str_radix(10);
    let decimals = decimals as usize;
    let (int_part, frac_part) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawAmount {
        s.parse().expect("valid amount")
    }

    #[test]
    fn parses_integers_and_fractions() {
        assert_eq!(raw("10").micros(), &BigUint::from(1_000_000_000u64));
        assert_eq!(raw("0.5").micros(), &BigUint::from(50_000_000u64));
        assert_eq!(raw(".5"), raw("0.5"));
        assert_eq!(raw("7."), raw("7"));
        assert_eq!(raw("007"), raw("7"));
        assert_eq!(raw("+3"), raw("3"));
    }

    #[test]
    fn rounds_half_up_at_eight_decimals() {
        assert_eq!(raw("0.123456784").micros(), &BigUint::from(12_345_678u64));
        assert_eq!(raw("0.123456785").micros(), &BigUint::from(12_345_679u64));
        assert_eq!(raw("0.000000005"), RawAmount::from_micros(1u32));
        assert!(raw("0.000000004").is_zero());
        assert_eq!(raw("0.999999999"), RawAmount::from_tokens(1));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            RawAmount::parse_decimal("-1"),
            Err(AmountError::Negative(_))
        ));
        assert!(matches!(
            RawAmount::parse_decimal("-0.00000001"),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(raw("-0").is_zero());
        assert!(raw("-0.000").is_zero());
    }

    #[test]
    fn rejects_non_finite_words() {
        for input in ["NaN", "inf", "-Infinity", "+INF"] {
            assert!(
                matches!(RawAmount::parse_decimal(input), Err(AmountError::NonFinite(_))),
                "{input} should be non-finite"
            );
        }
    }

    #[test]
    fn rejects_malformed_text() {
        for input in ["", ".", "1.2.3", "abc", "1e5", "1,5", "--1"] {
            assert!(
                matches!(RawAmount::parse_decimal(input), Err(AmountError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn float_conversion_uses_decimal_rendering() {
        let amount = RawAmount::try_from(0.1).expect("finite");
        assert_eq!(amount, raw("0.1"));
        assert_eq!(RawAmount::try_from(-0.0).expect("zero"), RawAmount::zero());
        assert!(matches!(RawAmount::try_from(f64::NAN), Err(AmountError::NonFinite(_))));
        assert!(matches!(
            RawAmount::try_from(f64::NEG_INFINITY),
            Err(AmountError::NonFinite(_))
        ));
        assert!(matches!(RawAmount::try_from(-1.0), Err(AmountError::Negative(_))));
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(raw("15").to_string(), "15");
        assert_eq!(raw("0.50").to_string(), "0.5");
        assert_eq!(raw("0.00000001").to_string(), "0.00000001");
        assert_eq!(RawAmount::zero().to_string(), "0");
    }

    #[test]
    fn addition_is_exact() {
        let total: RawAmount = [raw("0.1"), raw("0.2")].iter().sum();
        assert_eq!(total, raw("0.3"));
    }

    #[test]
    fn on_chain_amount_parses_plain_integers_only() {
        let amount: OnChainAmount = "123456789012345678901234567890".parse().expect("digits");
        assert_eq!(amount.to_string(), "123456789012345678901234567890");
        assert!("".parse::<OnChainAmount>().is_err());
        assert!("-5".parse::<OnChainAmount>().is_err());
        assert!("1.5".parse::<OnChainAmount>().is_err());
    }

    #[test]
    fn on_chain_token_string() {
        let one_and_half: OnChainAmount = "1500000000000000000000000".parse().expect("digits");
        assert_eq!(one_and_half.to_token_string(), "1.5");
        assert_eq!(OnChainAmount::new(1u32).to_token_string(), "0.000000000000000000000001");
    }

    #[test]
    fn amounts_serialize_as_strings() {
        let json = serde_json::to_string(&raw("2.25")).expect("serialize");
        assert_eq!(json, "\"2.25\"");
        let on_chain = OnChainAmount::new(42u32);
        assert_eq!(serde_json::to_string(&on_chain).expect("serialize"), "\"42\"");
        let back: OnChainAmount = serde_json::from_str("\"42\"").expect("deserialize");
        assert_eq!(back, on_chain);
    }
}
