//! Monetary amount split into words-ready parts.
//!
//! CRITICAL: Never use floating-point for money text.
//! The split works on the `Decimal` mantissa directly so every representable
//! amount converts exactly.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{BahtTextError, BahtTextResult};

/// Number of minor units kept after normalization.
pub const MINOR_DIGITS: u32 = 2;

/// Sign of a normalized amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Zero or above.
    #[default]
    Positive,
    /// Strictly below zero after truncation.
    Negative,
}

/// A decimal amount split into sign, major units and minor units.
///
/// Minor units are truncated toward zero, never rounded: `1.239` and `-1.239`
/// both carry 23 minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryAmount {
    /// Sign of the truncated amount.
    pub sign: Sign,
    /// Whole units (baht).
    pub major: u128,
    /// Fractional units (satang), always `0..=99`.
    pub minor: u8,
}

impl MonetaryAmount {
    /// Normalizes `amount` to two fractional digits and splits it.
    #[must_use]
    pub fn from_decimal(amount: Decimal) -> Self {
        let normalized = amount.round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::ToZero);

        let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
            Sign::Negative
        } else {
            Sign::Positive
        };

        // scale is at most MINOR_DIGITS after truncation
        let scale = normalized.scale();
        let mantissa = normalized.mantissa().unsigned_abs();
        let factor = 10u128.pow(scale);
        let major = mantissa / factor;
        let minor = (mantissa % factor) * 10u128.pow(MINOR_DIGITS - scale);

        #[allow(clippy::cast_possible_truncation)]
        let minor = minor as u8; // always < 100

        Self { sign, major, minor }
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if there are no minor units.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.minor == 0
    }
}

impl From<Decimal> for MonetaryAmount {
    fn from(amount: Decimal) -> Self {
        Self::from_decimal(amount)
    }
}

impl FromStr for MonetaryAmount {
    type Err = BahtTextError;

    fn from_str(s: &str) -> BahtTextResult<Self> {
        parse_decimal(s).map(Self::from_decimal)
    }
}

/// Parses decimal text, rejecting empty input.
pub fn parse_decimal(s: &str) -> BahtTextResult<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BahtTextError::InvalidAmount("amount must not be empty".to_string()));
    }
    Decimal::from_str(trimmed).map_err(|e| BahtTextError::InvalidAmount(format!("{trimmed}: {e}")))
}
