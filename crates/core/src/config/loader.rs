use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;

use super::{types::Config, ConfigError};
use crate::selector::CandidatePoolEntry;

/// Load configuration from file with environment variable overrides.
///
/// `DAILYPS_` variables override file values, using `__` between nested
/// keys (`DAILYPS_SYNC__PAGE_DELAY_MS=500`). The bare `DISCORD_WEBHOOK_URL`
/// variable is also honored for the webhook. A relative `selector.pool_file`
/// is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let mut config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(
            Env::raw()
                .only(&["DISCORD_WEBHOOK_URL"])
                .map(|_| "notifier.webhook_url".into()),
        )
        .merge(Env::prefixed("DAILYPS_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if let Some(pool_file) = config.selector.pool_file.clone() {
        let pool_path = match path.parent() {
            Some(dir) if pool_file.is_relative() => dir.join(&pool_file),
            _ => pool_file,
        };
        config.pool.extend(load_pool_file(&pool_path)?);
    }

    Ok(config)
}

/// Load configuration from TOML string (useful for testing).
///
/// A `selector.pool_file` here is resolved against the working directory.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    let mut config: Config =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if let Some(pool_file) = config.selector.pool_file.clone() {
        config.pool.extend(load_pool_file(&pool_file)?);
    }

    Ok(config)
}

#[derive(Deserialize)]
struct PoolFile {
    #[serde(rename = "selectedPool")]
    selected_pool: Vec<CandidatePoolEntry>,
}

/// Read sampling rules from a JSON file of shape `{"selectedPool": [...]}`.
pub fn load_pool_file(path: &Path) -> Result<Vec<CandidatePoolEntry>, ConfigError> {
    let pool_error = |message: String| ConfigError::PoolFile {
        path: path.display().to_string(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| pool_error(e.to_string()))?;
    let file: PoolFile = serde_json::from_str(&raw).map_err(|e| pool_error(e.to_string()))?;

    Ok(file.selected_pool)
}
