//! Language handlers.
//!
//! A [`LanguageHandler`] is the whole capability set for one output language:
//! identity, four fixed words and numeral grammar. Adding a language means
//! implementing this trait; nothing else in the crate enumerates languages.
//!
//! [`Language`] is a convenience adapter over the two built-in handlers.

pub mod english;
pub mod thai;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use bahttext_shared::{BahtTextError, MonetaryAmount};

use crate::config::OutputConfig;
use crate::layout;
use crate::numeral::NumeralConverter;

pub use english::EnglishLanguage;
pub use thai::ThaiLanguage;

/// Capability set for one output language.
///
/// Implementations are stateless and shared between threads.
pub trait LanguageHandler: Send + Sync {
    /// Short language code (e.g. `"th"`).
    fn code(&self) -> &str;

    /// Human-readable language name.
    fn name(&self) -> &str;

    /// Currency unit word for the major part.
    fn unit_word(&self) -> &str;

    /// Word appended when there are no minor units.
    fn exact_word(&self) -> &str;

    /// Currency unit word for the minor part.
    fn fraction_unit_word(&self) -> &str;

    /// Negative prefix used when the configuration does not pin one.
    fn default_negative_prefix(&self) -> &str;

    /// Numeral grammar for this language.
    fn numerals(&self) -> &dyn NumeralConverter;

    /// Text placed between words in the default layout.
    fn word_separator(&self) -> &str {
        self.numerals().lexicon().separator
    }

    /// Converts a split amount into words.
    fn convert(&self, amount: &MonetaryAmount, config: &OutputConfig) -> String {
        layout::assemble(self, amount, config)
    }
}

impl fmt::Debug for dyn LanguageHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandler")
            .field("code", &self.code())
            .field("name", &self.name())
            .finish()
    }
}

/// Built-in languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Thai words, the default.
    #[default]
    Thai,
    /// English words.
    English,
}

impl Language {
    /// Every built-in language.
    pub const ALL: [Self; 2] = [Self::Thai, Self::English];

    /// Returns the shared handler for this language.
    #[must_use]
    pub fn handler(self) -> Arc<dyn LanguageHandler> {
        match self {
            Self::Thai => Arc::new(ThaiLanguage),
            Self::English => Arc::new(EnglishLanguage),
        }
    }

    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Thai => "th",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = BahtTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "th" | "thai" => Ok(Self::Thai),
            "en" | "english" => Ok(Self::English),
            _ => Err(BahtTextError::UnknownLanguage(s.to_string())),
        }
    }
}

impl From<Language> for Arc<dyn LanguageHandler> {
    fn from(language: Language) -> Self {
        language.handler()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_handler_identity() {
        for language in Language::ALL {
            assert_eq!(language.handler().code(), language.code());
        }
        assert_eq!(Language::Thai.handler().name(), "Thai");
        assert_eq!(Language::English.handler().name(), "English");
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Thai.to_string(), "th");
        assert_eq!(Language::English.to_string(), "en");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("th").unwrap(), Language::Thai);
        assert_eq!(Language::from_str("TH").unwrap(), Language::Thai);
        assert_eq!(Language::from_str("Thai").unwrap(), Language::Thai);
        assert_eq!(Language::from_str("en").unwrap(), Language::English);
        assert_eq!(Language::from_str(" english ").unwrap(), Language::English);

        assert_eq!(
            Language::from_str("lo"),
            Err(BahtTextError::UnknownLanguage("lo".to_string()))
        );
        assert!(Language::from_str("").is_err());
    }

    #[test]
    fn test_default_language_is_thai() {
        assert_eq!(Language::default(), Language::Thai);
    }

    #[test]
    fn test_handler_debug() {
        let handler = Language::English.handler();
        assert_eq!(
            format!("{handler:?}"),
            "LanguageHandler { code: \"en\", name: \"English\" }"
        );
    }
}
