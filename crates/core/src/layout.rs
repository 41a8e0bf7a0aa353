//! Assembly of converted words into final text.
//!
//! Default layout, word separator per language:
//! - whole amount: `major [unit] [exact]`
//! - with minor units: `major [unit] minor [fraction-unit]`
//!
//! Bracketed words are emitted only with unit words enabled. A negative amount
//! gets the resolved prefix and a separator in front, unless the prefix is
//! pinned empty. When a template is configured for the amount's sign the
//! template renderer takes over and the prefix is only available through
//! `{NEGPREFIX}`.

use bahttext_shared::MonetaryAmount;
use tracing::{trace, warn};

use crate::config::OutputConfig;
use crate::language::LanguageHandler;
use crate::template::{AmountWords, TemplateRenderer};

/// Converts `amount` with `handler`, honouring `config`.
pub fn assemble<H: LanguageHandler + ?Sized>(
    handler: &H,
    amount: &MonetaryAmount,
    config: &OutputConfig,
) -> String {
    let numerals = handler.numerals();
    let words = AmountWords::spell(numerals, amount).unwrap_or_else(|err| {
        warn!(
            language = handler.code(),
            minor = amount.minor,
            error = %err,
            "fraction spelling failed, using magnitude words"
        );
        AmountWords {
            major: numerals.words_for_magnitude(amount.major),
            minor: numerals.words_for_magnitude(u128::from(amount.minor)),
            minor_value: amount.minor,
        }
    });
    let negative_prefix = config.negative_prefix_state().resolve(handler);

    if let Some(template) = config.template_for(amount.is_negative()) {
        trace!(language = handler.code(), template = %template, "rendering template layout");
        return TemplateRenderer::render(template, &words, handler, negative_prefix);
    }

    trace!(language = handler.code(), "rendering default layout");
    default_layout(handler, &words, amount, config, negative_prefix)
}

fn default_layout<H: LanguageHandler + ?Sized>(
    handler: &H,
    words: &AmountWords,
    amount: &MonetaryAmount,
    config: &OutputConfig,
    negative_prefix: &str,
) -> String {
    let separator = handler.word_separator();
    let with_units = config.include_unit_words();

    let mut parts: Vec<&str> = Vec::with_capacity(5);
    if amount.is_negative() && !negative_prefix.is_empty() {
        parts.push(negative_prefix);
    }
    parts.push(&words.major);
    if with_units {
        parts.push(handler.unit_word());
    }
    if amount.is_whole() {
        if with_units {
            parts.push(handler.exact_word());
        }
    } else {
        parts.push(&words.minor);
        if with_units {
            parts.push(handler.fraction_unit_word());
        }
    }

    parts.join(separator)
}
