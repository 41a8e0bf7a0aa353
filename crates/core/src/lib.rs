//! Core conversion logic for BahtText.
//!
//! Turns baht amounts into words, in Thai or English, with an optional
//! placeholder template controlling the layout. Pure logic, no I/O.
//!
//! # Modules
//!
//! - `numeral` - Number-to-words grammar per language
//! - `language` - Language handlers (fixed words plus numeral grammar)
//! - `template` - Layout templates and their renderer
//! - `config` - Output configuration and its builder
//! - `layout` - Default layout and template dispatch
//! - `formatter` - Conversion entry points
//! - `baht` - Amount bundled with its configuration
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(bahttext_core::convert(dec!(1234.56)), "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์");
//! ```

pub mod baht;
pub mod config;
pub mod formatter;
pub mod language;
pub mod layout;
pub mod numeral;
pub mod template;

pub use baht::BahtText;
pub use config::{NegativePrefix, OutputConfig, OutputConfigBuilder};
pub use formatter::{AmountFormatter, convert, convert_str, convert_with};
pub use language::{EnglishLanguage, Language, LanguageHandler, ThaiLanguage};
pub use numeral::{EnglishNumerals, NumeralConverter, NumeralLexicon, ThaiNumerals};
pub use template::{AmountWords, FormatTemplate, Placeholder, TemplateRenderer};

pub use bahttext_shared::{BahtTextError, BahtTextResult, MonetaryAmount, Settings, Sign};
