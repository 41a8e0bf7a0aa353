//! English language handler.

use super::LanguageHandler;
use crate::numeral::{EnglishNumerals, NumeralConverter};

/// English output: Baht / Satang / Only, negative prefix Minus, space-separated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLanguage;

impl LanguageHandler for EnglishLanguage {
    fn code(&self) -> &str {
        "en"
    }

    fn name(&self) -> &str {
        "English"
    }

    fn unit_word(&self) -> &str {
        "Baht"
    }

    fn exact_word(&self) -> &str {
        "Only"
    }

    fn fraction_unit_word(&self) -> &str {
        "Satang"
    }

    fn default_negative_prefix(&self) -> &str {
        "Minus"
    }

    fn numerals(&self) -> &dyn NumeralConverter {
        &EnglishNumerals
    }
}
