//! Conversion settings management.

use serde::Deserialize;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "BAHTTEXT";

/// Conversion settings loaded from files and environment.
///
/// These map one-to-one onto the output configuration used by the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Language code or name (e.g. `"th"`, `"english"`).
    #[serde(default = "default_language")]
    pub language: String,
    /// Whether unit words (baht, satang, exact) are emitted.
    #[serde(default = "default_true")]
    pub use_unit: bool,
    /// Reserved formal-wording flag.
    #[serde(default = "default_true")]
    pub formal: bool,
    /// Explicit negative prefix. Absent means "follow the language default".
    #[serde(default)]
    pub negative_prefix: Option<String>,
    /// Layout template for zero and positive amounts.
    #[serde(default)]
    pub positive_format: Option<String>,
    /// Layout template for negative amounts.
    #[serde(default)]
    pub negative_format: Option<String>,
}

fn default_language() -> String {
    "th".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            use_unit: true,
            formal: true,
            negative_prefix: None,
            positive_format: None,
            negative_format: None,
        }
    }
}

impl Settings {
    /// Loads settings from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BAHTTEXT__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses settings from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
