//! Amount bundled with its configuration.

use std::fmt;

use rust_decimal::Decimal;

use crate::config::{OutputConfig, OutputConfigBuilder};
use crate::formatter::AmountFormatter;

/// An amount plus the configuration to spell it with.
///
/// `Display` renders the words, so `to_string()` is the conversion.
///
/// ```
/// use rust_decimal_macros::dec;
/// use bahttext_core::{BahtText, Language};
///
/// let text = BahtText::new(dec!(500.25)).configure(|b| b.language(Language::English));
/// assert_eq!(text.to_string(), "Five Hundred Baht Twenty-Five Satang");
/// ```
#[derive(Debug, Clone)]
pub struct BahtText {
    amount: Decimal,
    config: OutputConfig,
}

impl BahtText {
    /// Wraps `amount` with the default configuration.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self::with_config(amount, OutputConfig::default())
    }

    /// Wraps `amount` with `config`.
    #[must_use]
    pub const fn with_config(amount: Decimal, config: OutputConfig) -> Self {
        Self { amount, config }
    }

    /// Amount as given.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Replaces the amount.
    #[must_use]
    pub const fn set_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn set_config(mut self, config: OutputConfig) -> Self {
        self.config = config;
        self
    }

    /// Modifies the configuration through [`OutputConfig::to_builder`].
    ///
    /// The negative prefix is pinned to its current value before `update`
    /// runs, so switching language here keeps the old prefix.
    #[must_use]
    pub fn configure<F>(mut self, update: F) -> Self
    where
        F: FnOnce(OutputConfigBuilder) -> OutputConfigBuilder,
    {
        self.config = update(self.config.to_builder()).build();
        self
    }
}

impl fmt::Display for BahtText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AmountFormatter::convert(self.amount, &self.config))
    }
}
