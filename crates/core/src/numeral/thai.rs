//! Thai numerals.
//!
//! Irregular forms:
//! - tens digit 1 is a bare "สิบ" (10 = สิบ, never หนึ่งสิบ)
//! - tens digit 2 is "ยี่สิบ"
//! - a trailing units digit 1 becomes "เอ็ด" once the value exceeds ten
//!   (11 = สิบเอ็ด, 101 = หนึ่งร้อยเอ็ด, but 1 = หนึ่ง)

use super::{NumeralConverter, NumeralLexicon};

/// Thai word tables.
pub const THAI_LEXICON: NumeralLexicon = NumeralLexicon {
    digits: [
        "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
    ],
    million: "ล้าน",
    separator: "",
};

/// Positional divisors and their words, hundred-thousands down to units.
const POSITIONS: [(u32, &str); 6] = [
    (100_000, "แสน"),
    (10_000, "หมื่น"),
    (1_000, "พัน"),
    (100, "ร้อย"),
    (10, "สิบ"),
    (1, ""),
];

const TEN: &str = "สิบ";
const TWENTY_PREFIX: &str = "ยี่";
const TRAILING_ONE: &str = "เอ็ด";

/// Thai numeral grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThaiNumerals;

impl NumeralConverter for ThaiNumerals {
    fn lexicon(&self) -> &NumeralLexicon {
        &THAI_LEXICON
    }

    fn words_below_million(&self, n: u32) -> String {
        let mut out = String::new();
        let mut remaining = n;

        for (divisor, position) in POSITIONS {
            let digit = remaining / divisor;
            remaining %= divisor;

            match (divisor, digit) {
                (_, 0) => {}
                (10, 1) => out.push_str(TEN),
                (10, 2) => {
                    out.push_str(TWENTY_PREFIX);
                    out.push_str(TEN);
                }
                (1, 1) if n > 10 => out.push_str(TRAILING_ONE),
                _ => {
                    out.push_str(THAI_LEXICON.digits[digit as usize]);
                    out.push_str(position);
                }
            }
        }

        out
    }
}
