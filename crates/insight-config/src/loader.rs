//! Loading and validating `DashboardConfig`.
//!
//! Parsing is strict about types and lenient about presence: a missing key
//! takes its default, a mistyped one is a `ConfigError`.

use std::path::Path;

use tracing::debug;

use insight_contracts::error::{InsightError, InsightResult};

use crate::settings::{Backend, DashboardConfig};

impl DashboardConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `InsightError::ConfigError` if the TOML is malformed, does not
    /// match the schema, or fails validation.
    pub fn from_toml_str(s: &str) -> InsightResult<Self> {
        let config: DashboardConfig = toml::from_str(s).map_err(|e| InsightError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.validate()?;

        debug!(
            backend = config.explanation.backend.as_str(),
            endpoint = config.explanation.endpoint(),
            timeout_secs = config.explanation.timeout_secs,
            "dashboard config loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as dashboard configuration.
    pub fn from_file(path: &Path) -> InsightResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| InsightError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> InsightResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> InsightResult<()> {
        let explanation = &self.explanation;

        if explanation.timeout_secs == 0 {
            return Err(InsightError::ConfigError {
                reason: "explanation.timeout_secs must be at least 1".to_string(),
            });
        }

        let needs_endpoint = matches!(explanation.backend, Backend::Http | Backend::Ollama);
        if needs_endpoint && !is_http_url(explanation.endpoint()) {
            return Err(InsightError::ConfigError {
                reason: format!(
                    "explanation.endpoint '{}' must start with http:// or https://",
                    explanation.endpoint()
                ),
            });
        }

        if explanation.backend == Backend::Ollama && explanation.model.trim().is_empty() {
            return Err(InsightError::ConfigError {
                reason: "explanation.model is required for the ollama backend".to_string(),
            });
        }

        Ok(())
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
