use basket_domain::config::BasketConfig;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "basket";

/// Prefix of environment overrides (`BASKET__PRICING__VAT_RATE=0.1`).
pub const ENV_PREFIX: &str = "BASKET";

/// Custom error type for config loading.
#[basket_derive::basket_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: an explicit `path` must exist. Without one, `basket.{toml,json,yaml,...}`
///    in the working directory is used when present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `BASKET__`, nested with double
///    underscores (`BASKET__STORAGE__DATA_DIR` maps to `storage.data_dir`).
///
/// Missing keys fall back to the `Default` of `T` when it is annotated with `#[serde(default)]`.
///
/// # Errors
/// * The explicit configuration file cannot be found or parsed.
/// * The merged sources do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use basket_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads [`BasketConfig`] and rejects values the pricing rules cannot work with.
///
/// # Errors
/// Everything [`load_config`] reports, plus [`ConfigError::Invalid`] for a negative or
/// non-finite VAT rate or delivery fee.
pub fn load_basket_config(path: Option<impl AsRef<Path>>) -> Result<BasketConfig, ConfigError> {
    let config: BasketConfig = load_config(path)?;
    validate(&config)?;
    debug!(
        vat_rate = config.pricing.vat_rate,
        data_dir = %config.storage.data_dir.display(),
        autosave = config.storage.autosave,
        "Config validated"
    );
    Ok(config)
}

/// Checks the numeric settings of an already deserialized configuration.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] naming the first offending key.
pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
    let pricing = &config.pricing;
    let checks = [
        ("pricing.vat_rate", pricing.vat_rate),
        ("pricing.delivery.relay", pricing.delivery.relay),
        ("pricing.delivery.home", pricing.delivery.home),
    ];

    for (key, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Invalid {
                message: format!("{key} must be a finite, non-negative number (got {value})").into(),
                context: None,
            });
        }
    }

    if config.storage.cart_key.trim().is_empty() {
        return Err(ConfigError::Invalid {
            message: Cow::Borrowed("storage.cart_key must not be empty"),
            context: None,
        });
    }

    Ok(())
}
