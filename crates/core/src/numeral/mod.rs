//! Numeral-to-words conversion.
//!
//! Each language supplies a [`NumeralLexicon`] (pure word tables) and a
//! [`NumeralConverter`] that knows how to spell `1..=999_999`. Everything
//! above that is composed here: the magnitude is split in base 1,000,000 and
//! the million word is repeated once per group level, so 10^12 reads as
//! "one million million" rather than "one trillion".

pub mod english;
pub mod thai;

#[cfg(test)]
mod props;

use bahttext_shared::{BahtTextError, BahtTextResult};

pub use english::EnglishNumerals;
pub use thai::ThaiNumerals;

/// Size of one magnitude group.
pub const MILLION: u128 = 1_000_000;

/// Largest fraction value accepted by [`NumeralConverter::words_for_fraction`].
pub const MAX_FRACTION: u32 = 99;

/// Word tables shared by every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralLexicon {
    /// Words for the digits zero through nine.
    pub digits: [&'static str; 10],
    /// Word appended once per million group.
    pub million: &'static str,
    /// Text placed between adjacent words (`""` for Thai, `" "` for English).
    pub separator: &'static str,
}

impl NumeralLexicon {
    /// Word for zero.
    #[must_use]
    pub const fn zero(&self) -> &'static str {
        self.digits[0]
    }
}

/// Language grammar for spelling numbers.
///
/// Implementors provide [`words_below_million`](Self::words_below_million);
/// magnitude grouping and fraction handling are shared.
pub trait NumeralConverter: Send + Sync {
    /// Word tables for this language.
    fn lexicon(&self) -> &NumeralLexicon;

    /// Spells `n` in `1..=999_999`. Zero digits are skipped entirely.
    fn words_below_million(&self, n: u32) -> String;

    /// Spells any non-negative magnitude.
    fn words_for_magnitude(&self, n: u128) -> String {
        if n == 0 {
            return self.lexicon().zero().to_string();
        }
        let mut out = String::new();
        push_groups(self, n, &mut out);
        out
    }

    /// Spells a fraction value in `0..=99`.
    ///
    /// # Errors
    ///
    /// Returns [`BahtTextError::FractionOutOfRange`] if `n > 99`.
    fn words_for_fraction(&self, n: u32) -> BahtTextResult<String> {
        if n > MAX_FRACTION {
            return Err(BahtTextError::FractionOutOfRange(n));
        }
        Ok(self.words_for_magnitude(u128::from(n)))
    }
}

// n > 0
fn push_groups<C: NumeralConverter + ?Sized>(converter: &C, n: u128, out: &mut String) {
    let lexicon = converter.lexicon();
    let high = n / MILLION;
    #[allow(clippy::cast_possible_truncation)]
    let low = (n % MILLION) as u32;

    if high > 0 {
        push_groups(converter, high, out);
        out.push_str(lexicon.separator);
        out.push_str(lexicon.million);
        if low > 0 {
            out.push_str(lexicon.separator);
        }
    }
    if low > 0 {
        out.push_str(&converter.words_below_million(low));
    }
}
