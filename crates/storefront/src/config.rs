//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults match the TezTayor restaurant
//! page.
//!
//! - `TEZTAYOR_SHOP_NAME` - Name shown in order summaries (default: `TezTayor`)
//! - `TEZTAYOR_COUNTRY_PREFIX` - Prefix attached to local phone numbers (default: `+992`)
//! - `TEZTAYOR_MESSAGING_DOMAIN` - Host of the messaging hand-off link (default: `wa.me`)
//! - `TEZTAYOR_MESSAGING_DESTINATION` - Number that receives hand-off orders (default: `992000000000`)
//! - `TEZTAYOR_CURRENCY_SUFFIX` - Unit shown after totals (default: per language)
//! - `TEZTAYOR_CART_KEY` - Storage key of the saved cart (default: `cart`)
//! - `TEZTAYOR_LANGUAGE` - `en` or `ru` (default: `en`)
//! - `TEZTAYOR_STORAGE_PATH` - File backing the key-value store (default: `.teztayor/storage.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::messages::{Language, Messages};

const DEFAULT_SHOP_NAME: &str = "TezTayor";
const DEFAULT_COUNTRY_PREFIX: &str = "+992";
const DEFAULT_MESSAGING_DOMAIN: &str = "wa.me";
const DEFAULT_MESSAGING_DESTINATION: &str = "992000000000";
const DEFAULT_CART_KEY: &str = "cart";
const DEFAULT_STORAGE_PATH: &str = ".teztayor/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Name shown at the top of order summaries
    pub shop_name: String,
    /// Country prefix for phone numbers, e.g. `+992`
    pub country_prefix: String,
    /// Messaging hand-off target
    pub messaging: MessagingConfig,
    /// Currency suffix override; `None` uses the language default
    pub currency_suffix: Option<String>,
    /// Key the cart is stored under
    pub cart_key: String,
    /// Language of user-facing texts
    pub language: Language,
    /// File backing the key-value store (used by file-based hosts)
    pub storage_path: PathBuf,
}

/// Messaging hand-off configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingConfig {
    /// Host of the hand-off link (e.g., `wa.me`)
    pub domain: String,
    /// Destination number, digits only
    pub destination: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            country_prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
            messaging: MessagingConfig::default(),
            currency_suffix: None,
            cart_key: DEFAULT_CART_KEY.to_string(),
            language: Language::default(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_MESSAGING_DOMAIN.to_string(),
            destination: DEFAULT_MESSAGING_DESTINATION.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let language = match env.optional("TEZTAYOR_LANGUAGE") {
            Some(value) => value
                .parse::<Language>()
                .map_err(|e| ConfigError::InvalidEnvVar("TEZTAYOR_LANGUAGE".to_string(), e))?,
            None => Language::default(),
        };

        let country_prefix = env.or_default("TEZTAYOR_COUNTRY_PREFIX", DEFAULT_COUNTRY_PREFIX);
        validate_country_prefix(&country_prefix)?;

        let messaging = MessagingConfig {
            domain: env.or_default("TEZTAYOR_MESSAGING_DOMAIN", DEFAULT_MESSAGING_DOMAIN),
            destination: env.or_default(
                "TEZTAYOR_MESSAGING_DESTINATION",
                DEFAULT_MESSAGING_DESTINATION,
            ),
        };
        messaging.validate()?;

        let cart_key = env.or_default("TEZTAYOR_CART_KEY", DEFAULT_CART_KEY);
        if cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TEZTAYOR_CART_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            shop_name: env.or_default("TEZTAYOR_SHOP_NAME", DEFAULT_SHOP_NAME),
            country_prefix,
            messaging,
            currency_suffix: env.optional("TEZTAYOR_CURRENCY_SUFFIX"),
            cart_key,
            language,
            storage_path: PathBuf::from(
                env.or_default("TEZTAYOR_STORAGE_PATH", DEFAULT_STORAGE_PATH),
            ),
        })
    }

    /// The text table for the configured language.
    #[must_use]
    pub const fn messages(&self) -> &'static Messages {
        self.language.messages()
    }

    /// Currency suffix shown after totals.
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency_suffix
            .as_deref()
            .unwrap_or_else(|| self.messages().currency)
    }
}

impl MessagingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.destination.is_empty() || !self.destination.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar(
                "TEZTAYOR_MESSAGING_DESTINATION".to_string(),
                "must contain only digits".to_string(),
            ));
        }

        // The domain must be a bare host: no scheme, path or port games.
        let parsed = Url::parse(&format!("https://{}/", self.domain)).map_err(|e| {
            ConfigError::InvalidEnvVar("TEZTAYOR_MESSAGING_DOMAIN".to_string(), e.to_string())
        })?;
        if parsed.host_str() != Some(self.domain.as_str()) {
            return Err(ConfigError::InvalidEnvVar(
                "TEZTAYOR_MESSAGING_DOMAIN".to_string(),
                format!("'{}' is not a bare host name", self.domain),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the default/optional helpers used above.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable; blank values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

/// Validate that a country prefix looks like `+` followed by digits.
fn validate_country_prefix(prefix: &str) -> Result<(), ConfigError> {
    let digits = prefix.strip_prefix('+').unwrap_or_default();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "TEZTAYOR_COUNTRY_PREFIX".to_string(),
            format!("'{prefix}' must be '+' followed by digits"),
        ));
    }
    Ok(())
}
