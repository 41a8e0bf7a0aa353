//! Thai language handler.

use super::LanguageHandler;
use crate::numeral::{NumeralConverter, ThaiNumerals};

/// Thai output: บาท / สตางค์ / ถ้วน, negative prefix ลบ, no word spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThaiLanguage;

impl LanguageHandler for ThaiLanguage {
    fn code(&self) -> &str {
        "th"
    }

    fn name(&self) -> &str {
        "Thai"
    }

    fn unit_word(&self) -> &str {
        "บาท"
    }

    fn exact_word(&self) -> &str {
        "ถ้วน"
    }

    fn fraction_unit_word(&self) -> &str {
        "สตางค์"
    }

    fn default_negative_prefix(&self) -> &str {
        "ลบ"
    }

    fn numerals(&self) -> &dyn NumeralConverter {
        &ThaiNumerals
    }
}
