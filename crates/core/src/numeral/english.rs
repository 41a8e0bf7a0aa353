//! English numerals.

use super::{NumeralConverter, NumeralLexicon};

/// English word tables.
pub const ENGLISH_LEXICON: NumeralLexicon = NumeralLexicon {
    digits: [
        "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
    ],
    million: "Million",
    separator: " ",
};

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: &str = "Hundred";
const THOUSAND: &str = "Thousand";

/// English numeral grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNumerals;

impl EnglishNumerals {
    // 1..=999
    fn push_below_thousand(n: u32, out: &mut String) {
        let hundreds = n / 100;
        let rest = n % 100;

        if hundreds > 0 {
            out.push_str(ENGLISH_LEXICON.digits[hundreds as usize]);
            out.push(' ');
            out.push_str(HUNDRED);
            if rest > 0 {
                out.push(' ');
            }
        }

        match rest {
            0 => {}
            1..=9 => out.push_str(ENGLISH_LEXICON.digits[rest as usize]),
            10..=19 => out.push_str(TEENS[(rest - 10) as usize]),
            _ => {
                out.push_str(TENS[(rest / 10) as usize]);
                let unit = rest % 10;
                if unit > 0 {
                    out.push('-');
                    out.push_str(ENGLISH_LEXICON.digits[unit as usize]);
                }
            }
        }
    }
}

impl NumeralConverter for EnglishNumerals {
    fn lexicon(&self) -> &NumeralLexicon {
        &ENGLISH_LEXICON
    }

    fn words_below_million(&self, n: u32) -> String {
        let mut out = String::new();
        let thousands = n / 1_000;
        let rest = n % 1_000;

        if thousands > 0 {
            Self::push_below_thousand(thousands, &mut out);
            out.push(' ');
            out.push_str(THOUSAND);
            if rest > 0 {
                out.push(' ');
            }
        }
        if rest > 0 {
            Self::push_below_thousand(rest, &mut out);
        }

        out
    }
}
