//! Settings for the explanation service, read from the process environment.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Key captured at build time for the browser build, which has no process environment.
#[cfg(target_arch = "wasm32")]
const BUILD_TIME_API_KEY: Option<&str> = option_env!("API_KEY");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    api_key: Option<String>,
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    gemini_base_url: Option<String>,
}

impl RawSettings {
    #[cfg(target_arch = "wasm32")]
    fn or_build_time_key(mut self) -> Self {
        let has_key = [&self.api_key, &self.gemini_api_key]
            .into_iter()
            .flatten()
            .any(|key| !key.trim().is_empty());
        if !has_key {
            self.api_key = BUILD_TIME_API_KEY.map(str::to_string);
        }
        self
    }

    fn resolve(self) -> Result<ExplainerConfig, ConfigError> {
        let api_key = non_empty(self.api_key)
            .or_else(|| non_empty(self.gemini_api_key))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(ExplainerConfig {
            api_key,
            model: non_empty(self.gemini_model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty(self.gemini_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ExplainerConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for ExplainerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplainerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ExplainerConfig {
    /// Loads `API_KEY` (or `GEMINI_API_KEY`), `GEMINI_MODEL` and `GEMINI_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let source = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        let raw: RawSettings = source.try_deserialize()?;
        #[cfg(target_arch = "wasm32")]
        let raw = raw.or_build_time_key();
        raw.resolve()
    }

    pub fn from_source(source: config::Config) -> Result<Self, ConfigError> {
        source.try_deserialize::<RawSettings>()?.resolve()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
