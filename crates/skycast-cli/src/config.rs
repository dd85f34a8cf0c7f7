use std::env;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Environment variable (and `.env` key) holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Explicit API configuration, loaded once at startup and passed into each
/// client constructor.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
}

impl ApiConfig {
    /// Load the API key from `./.env` when present, else from the process
    /// environment.
    pub fn load() -> Result<Self> {
        Self::load_with_env_file(Path::new(".env"))
    }

    fn load_with_env_file(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("reading API key from {}", path.display());
            let entries = dotenvy::from_path_iter(path)
                .with_context(|| format!("failed to read env file {}", path.display()))?;

            for entry in entries {
                let (key, value) = entry
                    .with_context(|| format!("malformed env file {}", path.display()))?;
                if key == API_KEY_VAR {
                    return Self::from_key(value);
                }
            }
        }

        let key = env::var(API_KEY_VAR).with_context(|| {
            format!("{API_KEY_VAR} is not set; add it to the environment or a local .env file")
        })?;
        Self::from_key(key)
    }

    fn from_key(api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            bail!("{API_KEY_VAR} is empty");
        }
        Ok(ApiConfig { api_key })
    }
}
