//! Shared types, errors, and configuration for BahtText.
//!
//! This crate provides common types used by the conversion core:
//! - Monetary amount split into sign, major units and minor units
//! - Conversion error types
//! - Settings management (files + environment)

pub mod config;
pub mod error;
pub mod types;

pub use config::Settings;
pub use error::{BahtTextError, BahtTextResult};
pub use types::{MonetaryAmount, Sign};
