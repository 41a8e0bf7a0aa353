//! Conversion error types.

use thiserror::Error;

/// Result type alias using `BahtTextError`.
pub type BahtTextResult<T> = Result<T, BahtTextError>;

/// Errors raised at the conversion boundary.
///
/// Everything here is a validation failure: nothing is partially applied and
/// nothing is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BahtTextError {
    /// Format template is missing a required placeholder.
    #[error("Format template {template:?} must contain {missing}")]
    InvalidTemplate {
        /// The rejected template text.
        template: String,
        /// The first required placeholder that was not found.
        missing: &'static str,
    },

    /// Fraction value passed to a numeral converter is outside 0..=99.
    #[error("Fraction value {0} is out of range, expected 0..=99")]
    FractionOutOfRange(u32),

    /// Amount text is empty or not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Language identifier does not name a built-in language.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Settings could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BahtTextError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTemplate { .. } => "INVALID_TEMPLATE",
            Self::FractionOutOfRange(_) => "FRACTION_OUT_OF_RANGE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<config::ConfigError> for BahtTextError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BahtTextError::InvalidTemplate {
                template: String::new(),
                missing: "{FLOAT}",
            }
            .error_code(),
            "INVALID_TEMPLATE"
        );
        assert_eq!(
            BahtTextError::FractionOutOfRange(100).error_code(),
            "FRACTION_OUT_OF_RANGE"
        );
        assert_eq!(
            BahtTextError::InvalidAmount(String::new()).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            BahtTextError::UnknownLanguage(String::new()).error_code(),
            "UNKNOWN_LANGUAGE"
        );
        assert_eq!(
            BahtTextError::Configuration(String::new()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BahtTextError::InvalidTemplate {
                template: "{INTEGER}".into(),
                missing: "{FLOAT}",
            }
            .to_string(),
            "Format template \"{INTEGER}\" must contain {FLOAT}"
        );
        assert_eq!(
            BahtTextError::FractionOutOfRange(120).to_string(),
            "Fraction value 120 is out of range, expected 0..=99"
        );
        assert_eq!(
            BahtTextError::InvalidAmount("abc".into()).to_string(),
            "Invalid amount: abc"
        );
        assert_eq!(
            BahtTextError::UnknownLanguage("xx".into()).to_string(),
            "Unknown language: xx"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: BahtTextError = config::ConfigError::Message("broken".into()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert_eq!(err.to_string(), "Configuration error: broken");
    }
}
