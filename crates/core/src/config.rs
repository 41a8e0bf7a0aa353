//! Output configuration.
//!
//! [`OutputConfig`] is immutable; changes go through [`OutputConfigBuilder`].
//!
//! The negative prefix is a two-state field ([`NegativePrefix`]):
//! - a fresh builder starts `Tracking` and follows whatever handler is selected
//! - `negative_prefix(..)` pins a value, including the empty string
//! - `OutputConfig::to_builder` always pins the prefix the config currently
//!   resolves to, so a tracked default is frozen by copy-and-modify

use std::str::FromStr;
use std::sync::Arc;

use bahttext_shared::{BahtTextResult, Settings};

use crate::language::{Language, LanguageHandler};
use crate::template::FormatTemplate;

/// Negative prefix state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NegativePrefix {
    /// Follow the handler's default prefix.
    #[default]
    Tracking,
    /// Fixed prefix, kept across handler changes.
    Pinned(String),
}

impl NegativePrefix {
    /// Resolves the prefix against `handler`.
    #[must_use]
    pub fn resolve<'a, H: LanguageHandler + ?Sized>(&'a self, handler: &'a H) -> &'a str {
        match self {
            Self::Tracking => handler.default_negative_prefix(),
            Self::Pinned(prefix) => prefix,
        }
    }

    /// Returns true if the prefix was set explicitly.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned(_))
    }
}

/// Immutable output configuration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    handler: Arc<dyn LanguageHandler>,
    include_unit_words: bool,
    formal: bool,
    negative_prefix: NegativePrefix,
    positive_template: Option<FormatTemplate>,
    negative_template: Option<FormatTemplate>,
}

impl Default for OutputConfig {
    /// Thai, unit words on, tracking prefix, no templates.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl OutputConfig {
    /// Starts a builder for the default language.
    #[must_use]
    pub fn builder() -> OutputConfigBuilder {
        Self::builder_for(Language::default())
    }

    /// Starts a builder for `handler` with a tracking negative prefix.
    #[must_use]
    pub fn builder_for(handler: impl Into<Arc<dyn LanguageHandler>>) -> OutputConfigBuilder {
        OutputConfigBuilder {
            handler: handler.into(),
            include_unit_words: true,
            formal: true,
            negative_prefix: NegativePrefix::Tracking,
            positive_template: None,
            negative_template: None,
        }
    }

    /// Default configuration for a built-in language.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::builder_for(language).build()
    }

    /// Builds a configuration from loaded settings.
    ///
    /// A present `negative_prefix` is pinned, an absent one tracks the language.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown language or an invalid template.
    pub fn from_settings(settings: &Settings) -> BahtTextResult<Self> {
        let language = Language::from_str(&settings.language)?;
        let mut builder = Self::builder_for(language)
            .include_unit_words(settings.use_unit)
            .formal(settings.formal);

        if let Some(prefix) = &settings.negative_prefix {
            builder = builder.negative_prefix(prefix.as_str());
        }
        if let Some(format) = &settings.positive_format {
            builder = builder.positive_format(format)?;
        }
        if let Some(format) = &settings.negative_format {
            builder = builder.negative_format(format)?;
        }

        Ok(builder.build())
    }

    /// Copies this configuration into a builder.
    ///
    /// The current resolved prefix is pinned, even if this config was tracking.
    #[must_use]
    pub fn to_builder(&self) -> OutputConfigBuilder {
        OutputConfigBuilder {
            handler: Arc::clone(&self.handler),
            include_unit_words: self.include_unit_words,
            formal: self.formal,
            negative_prefix: NegativePrefix::Pinned(self.negative_prefix().to_string()),
            positive_template: self.positive_template.clone(),
            negative_template: self.negative_template.clone(),
        }
    }

    /// Selected language handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn LanguageHandler> {
        &self.handler
    }

    /// Whether unit words are emitted.
    #[must_use]
    pub const fn include_unit_words(&self) -> bool {
        self.include_unit_words
    }

    /// Reserved formal-wording flag. Has no effect on output.
    #[must_use]
    pub const fn formal(&self) -> bool {
        self.formal
    }

    /// Negative prefix resolved against the selected handler.
    #[must_use]
    pub fn negative_prefix(&self) -> &str {
        self.negative_prefix.resolve(self.handler.as_ref())
    }

    /// Negative prefix state.
    #[must_use]
    pub const fn negative_prefix_state(&self) -> &NegativePrefix {
        &self.negative_prefix
    }

    /// Template for zero and positive amounts.
    #[must_use]
    pub const fn positive_template(&self) -> Option<&FormatTemplate> {
        self.positive_template.as_ref()
    }

    /// Template for negative amounts.
    #[must_use]
    pub const fn negative_template(&self) -> Option<&FormatTemplate> {
        self.negative_template.as_ref()
    }

    /// Template for an amount of the given sign, if one is configured.
    #[must_use]
    pub const fn template_for(&self, negative: bool) -> Option<&FormatTemplate> {
        if negative {
            self.negative_template()
        } else {
            self.positive_template()
        }
    }
}

/// Builder for [`OutputConfig`].
#[derive(Debug, Clone)]
pub struct OutputConfigBuilder {
    handler: Arc<dyn LanguageHandler>,
    include_unit_words: bool,
    formal: bool,
    negative_prefix: NegativePrefix,
    positive_template: Option<FormatTemplate>,
    negative_template: Option<FormatTemplate>,
}

impl OutputConfigBuilder {
    /// Selects a language handler. A tracking prefix follows it.
    #[must_use]
    pub fn handler(mut self, handler: impl Into<Arc<dyn LanguageHandler>>) -> Self {
        self.handler = handler.into();
        self
    }

    /// Selects a built-in language.
    #[must_use]
    pub fn language(self, language: Language) -> Self {
        self.handler(language)
    }

    /// Toggles unit words (baht, satang, exact).
    #[must_use]
    pub const fn include_unit_words(mut self, include: bool) -> Self {
        self.include_unit_words = include;
        self
    }

    /// Sets the reserved formal flag.
    #[must_use]
    pub const fn formal(mut self, formal: bool) -> Self {
        self.formal = formal;
        self
    }

    /// Pins the negative prefix. An empty string pins "no prefix".
    #[must_use]
    pub fn negative_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.negative_prefix = NegativePrefix::Pinned(prefix.into());
        self
    }

    /// Clears an explicit prefix so it tracks the handler again.
    #[must_use]
    pub fn track_negative_prefix(mut self) -> Self {
        self.negative_prefix = NegativePrefix::Tracking;
        self
    }

    /// Sets the positive template from a raw string.
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks `{INTEGER}` or `{FLOAT}`.
    pub fn positive_format(self, format: &str) -> BahtTextResult<Self> {
        Ok(self.positive_template(FormatTemplate::new(format)?))
    }

    /// Sets the negative template from a raw string.
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks `{INTEGER}` or `{FLOAT}`.
    pub fn negative_format(self, format: &str) -> BahtTextResult<Self> {
        Ok(self.negative_template(FormatTemplate::new(format)?))
    }

    /// Sets the positive or negative template from a raw string.
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks `{INTEGER}` or `{FLOAT}`.
    pub fn format(self, format: &str, negative: bool) -> BahtTextResult<Self> {
        if negative {
            self.negative_format(format)
        } else {
            self.positive_format(format)
        }
    }

    /// Sets the positive template.
    #[must_use]
    pub fn positive_template(mut self, template: FormatTemplate) -> Self {
        self.positive_template = Some(template);
        self
    }

    /// Sets the negative template.
    #[must_use]
    pub fn negative_template(mut self, template: FormatTemplate) -> Self {
        self.negative_template = Some(template);
        self
    }

    /// Removes both templates, restoring the default layout.
    #[must_use]
    pub fn clear_templates(mut self) -> Self {
        self.positive_template = None;
        self.negative_template = None;
        self
    }

    /// Finalizes the configuration.
    #[must_use]
    pub fn build(self) -> OutputConfig {
        OutputConfig {
            handler: self.handler,
            include_unit_words: self.include_unit_words,
            formal: self.formal,
            negative_prefix: self.negative_prefix,
            positive_template: self.positive_template,
            negative_template: self.negative_template,
        }
    }
}
