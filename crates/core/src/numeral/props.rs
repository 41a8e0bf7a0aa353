//! Property-based tests for numeral conversion.
//!
//! - Million grouping composes from the high and low parts
//! - Fraction words are unique over 0..=99
//! - Zero digits never leak into the words of non-zero values

use std::collections::HashSet;

use proptest::prelude::*;

use super::{EnglishNumerals, MILLION, NumeralConverter, ThaiNumerals};

/// Strategy for the `1..=999_999` sub-range.
fn below_million() -> impl Strategy<Value = u32> {
    1u32..1_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* high group h >= 1 and low group l, the words for
    /// h * 1e6 + l are words(h) + million + words(l).
    #[test]
    fn prop_thai_million_grouping(high in 1u64..1_000_000_000, low in 0u32..1_000_000) {
        let n = u128::from(high) * MILLION + u128::from(low);
        let mut expected = ThaiNumerals.words_for_magnitude(u128::from(high));
        expected.push_str("ล้าน");
        if low > 0 {
            expected.push_str(&ThaiNumerals.words_below_million(low));
        }
        prop_assert_eq!(ThaiNumerals.words_for_magnitude(n), expected);
    }

    #[test]
    fn prop_english_million_grouping(high in 1u64..1_000_000_000, low in 0u32..1_000_000) {
        let n = u128::from(high) * MILLION + u128::from(low);
        let mut expected = EnglishNumerals.words_for_magnitude(u128::from(high));
        expected.push_str(" Million");
        if low > 0 {
            expected.push(' ');
            expected.push_str(&EnglishNumerals.words_below_million(low));
        }
        prop_assert_eq!(EnglishNumerals.words_for_magnitude(n), expected);
    }

    /// *For any* n in 1..=999_999, the zero word never appears.
    #[test]
    fn prop_no_zero_word_for_non_zero(n in below_million()) {
        prop_assert!(!ThaiNumerals.words_below_million(n).contains("ศูนย์"));
        prop_assert!(!EnglishNumerals.words_below_million(n).contains("Zero"));
    }

    /// *For any* n in 1..=999_999, English words have no doubled or
    /// dangling spaces.
    #[test]
    fn prop_english_spacing(n in below_million()) {
        let words = EnglishNumerals.words_below_million(n);
        prop_assert!(!words.contains("  "));
        prop_assert_eq!(words.trim(), words.as_str());
    }
}

#[test]
fn fraction_words_are_unique() {
    for converter in [&ThaiNumerals as &dyn NumeralConverter, &EnglishNumerals] {
        let words: HashSet<String> = (0..=99)
            .map(|n| converter.words_for_fraction(n).unwrap())
            .collect();
        assert_eq!(words.len(), 100);
    }
}
