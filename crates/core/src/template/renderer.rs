//! Template rendering.
//!
//! Two passes over the template text:
//! 1. Conditional blocks (`{FLOAT?` first, then `{SATANG?`) are kept or
//!    dropped. Kept content is copied raw, placeholders included.
//! 2. A single left-to-right scan replaces placeholder tokens. Substituted
//!    values are written straight to the output and never scanned again.
//!
//! A conditional marker without a matching `}` is not an error: the rest of
//! the text from the marker on is copied literally.

use bahttext_shared::{BahtTextResult, MonetaryAmount};
use tracing::warn;

use super::{CONDITIONAL_MARKERS, FormatTemplate, Placeholder};
use crate::language::LanguageHandler;
use crate::numeral::NumeralConverter;

/// Words for the two parts of an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountWords {
    /// Major-unit words.
    pub major: String,
    /// Minor-unit words (the zero word when there are none).
    pub minor: String,
    /// Minor-unit value, `0..=99`.
    pub minor_value: u8,
}

impl AmountWords {
    /// Spells both parts of `amount`, the minor part through
    /// [`NumeralConverter::words_for_fraction`].
    ///
    /// # Errors
    ///
    /// Returns whatever error the converter reports for the minor part.
    pub fn spell(numerals: &dyn NumeralConverter, amount: &MonetaryAmount) -> BahtTextResult<Self> {
        Ok(Self {
            major: numerals.words_for_magnitude(amount.major),
            minor: numerals.words_for_fraction(u32::from(amount.minor))?,
            minor_value: amount.minor,
        })
    }
}

/// Resolved values for every placeholder.
struct Substitutions<'a> {
    integer: &'a str,
    float: &'a str,
    unit: &'a str,
    exact: &'a str,
    satang: &'a str,
    negative_prefix: &'a str,
}

impl Substitutions<'_> {
    const fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Integer => self.integer,
            Placeholder::Float => self.float,
            Placeholder::Unit => self.unit,
            Placeholder::Exact => self.exact,
            Placeholder::Satang => self.satang,
            Placeholder::NegPrefix => self.negative_prefix,
        }
    }
}

/// Renders [`FormatTemplate`]s.
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Renders `template` with `words` in the language of `handler`.
    #[must_use]
    pub fn render<H: LanguageHandler + ?Sized>(
        template: &FormatTemplate,
        words: &AmountWords,
        handler: &H,
        negative_prefix: &str,
    ) -> String {
        let keep_fraction = words.minor != handler.numerals().lexicon().zero();

        let mut text = template.as_str().to_string();
        for marker in CONDITIONAL_MARKERS {
            text = resolve_conditional(&text, marker, keep_fraction);
        }

        let values = Substitutions {
            integer: &words.major,
            float: &words.minor,
            unit: handler.unit_word(),
            exact: if words.minor_value == 0 {
                handler.exact_word()
            } else {
                ""
            },
            satang: handler.fraction_unit_word(),
            negative_prefix,
        };
        substitute(&text, &values)
    }
}

/// Keeps or drops every `marker ... }` block in `text`.
fn resolve_conditional(text: &str, marker: &str, keep: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        out.push_str(&rest[..start]);
        let content = &rest[start + marker.len()..];

        let Some(close) = matching_brace(content) else {
            warn!(
                marker,
                remainder = &rest[start..],
                "unmatched conditional block, copying remainder literally"
            );
            out.push_str(&rest[start..]);
            return out;
        };

        if keep {
            out.push_str(&content[..close]);
        }
        rest = &content[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Byte index of the `}` closing a block whose `{` is already open.
fn matching_brace(content: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, byte) in content.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn substitute(text: &str, values: &Substitutions<'_>) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match Placeholder::ALL
            .into_iter()
            .find(|placeholder| candidate.starts_with(placeholder.token()))
        {
            Some(placeholder) => {
                out.push_str(values.value(placeholder));
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
