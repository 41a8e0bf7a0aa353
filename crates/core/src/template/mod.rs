//! Layout templates.
//!
//! A template is plain text with placeholders:
//!
//! | token | value |
//! |---|---|
//! | `{INTEGER}` | major-unit words (required) |
//! | `{FLOAT}` | minor-unit words (required) |
//! | `{UNIT}` | currency unit word |
//! | `{EXACT}` | exact word when there are no minor units, else nothing |
//! | `{SATANG}` | minor-unit word |
//! | `{NEGPREFIX}` | resolved negative prefix |
//!
//! `{FLOAT?...}` and `{SATANG?...}` keep their content only when the minor
//! words are not the language's zero word. Content may nest braces.

pub mod renderer;

use std::fmt;
use std::str::FromStr;

use bahttext_shared::{BahtTextError, BahtTextResult};

pub use renderer::{AmountWords, TemplateRenderer};

/// Placeholder tokens understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{INTEGER}`
    Integer,
    /// `{FLOAT}`
    Float,
    /// `{UNIT}`
    Unit,
    /// `{EXACT}`
    Exact,
    /// `{SATANG}`
    Satang,
    /// `{NEGPREFIX}`
    NegPrefix,
}

impl Placeholder {
    /// Every placeholder.
    pub const ALL: [Self; 6] = [
        Self::Integer,
        Self::Float,
        Self::Unit,
        Self::Exact,
        Self::Satang,
        Self::NegPrefix,
    ];

    /// Placeholders a template must contain.
    pub const REQUIRED: [Self; 2] = [Self::Integer, Self::Float];

    /// Literal token text.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Integer => "{INTEGER}",
            Self::Float => "{FLOAT}",
            Self::Unit => "{UNIT}",
            Self::Exact => "{EXACT}",
            Self::Satang => "{SATANG}",
            Self::NegPrefix => "{NEGPREFIX}",
        }
    }
}

/// Conditional block markers, resolved in this order.
pub const CONDITIONAL_MARKERS: [&str; 2] = ["{FLOAT?", "{SATANG?"];

/// A validated layout template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatTemplate {
    raw: String,
}

impl FormatTemplate {
    /// Validates and wraps `template`.
    ///
    /// # Errors
    ///
    /// Returns [`BahtTextError::InvalidTemplate`] if `{INTEGER}` or `{FLOAT}`
    /// is missing.
    pub fn new(template: impl Into<String>) -> BahtTextResult<Self> {
        let raw = template.into();
        if let Some(missing) = Placeholder::REQUIRED
            .into_iter()
            .find(|placeholder| !raw.contains(placeholder.token()))
        {
            return Err(BahtTextError::InvalidTemplate {
                template: raw,
                missing: missing.token(),
            });
        }
        Ok(Self { raw })
    }

    /// Template text exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FormatTemplate {
    type Err = BahtTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FormatTemplate {
    type Error = BahtTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for FormatTemplate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
