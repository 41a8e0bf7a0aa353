//! Entry points: decimal in, words out.

use bahttext_shared::types::amount::parse_decimal;
use bahttext_shared::{BahtTextResult, MonetaryAmount};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::OutputConfig;

/// Converts decimal amounts to words.
///
/// Normalizes the amount (truncating to two fractional digits), splits it and
/// hands the split to the configured language handler.
pub struct AmountFormatter;

impl AmountFormatter {
    /// Converts `amount` using `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use bahttext_core::{AmountFormatter, Language, OutputConfig};
    ///
    /// let config = OutputConfig::for_language(Language::English);
    /// let text = AmountFormatter::convert(dec!(-100.00), &config);
    /// assert_eq!(text, "Minus One Hundred Baht Only");
    /// ```
    #[must_use]
    pub fn convert(amount: Decimal, config: &OutputConfig) -> String {
        let split = MonetaryAmount::from_decimal(amount);
        debug!(
            %amount,
            language = config.handler().code(),
            negative = split.is_negative(),
            "converting amount"
        );
        config.handler().convert(&split, config)
    }

    /// Parses decimal text, then converts it.
    ///
    /// # Errors
    ///
    /// Returns [`bahttext_shared::BahtTextError::InvalidAmount`] for empty or
    /// malformed text.
    pub fn convert_str(amount: &str, config: &OutputConfig) -> BahtTextResult<String> {
        let amount = parse_decimal(amount)?;
        Ok(Self::convert(amount, config))
    }
}

/// Converts `amount` with the default configuration (Thai, unit words on).
#[must_use]
pub fn convert(amount: Decimal) -> String {
    AmountFormatter::convert(amount, &OutputConfig::default())
}

/// Converts `amount` with `config`.
#[must_use]
pub fn convert_with(amount: Decimal, config: &OutputConfig) -> String {
    AmountFormatter::convert(amount, config)
}

/// Parses and converts decimal text with `config`.
///
/// # Errors
///
/// Returns an error for empty or malformed text.
pub fn convert_str(amount: &str, config: &OutputConfig) -> BahtTextResult<String> {
    AmountFormatter::convert_str(amount, config)
}
