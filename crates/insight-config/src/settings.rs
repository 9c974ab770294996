//! Configuration schema.
//!
//! A `DashboardConfig` is deserialized from TOML. Every table and key is
//! optional; anything left out takes the default shown below.
//!
//! ```toml
//! [explanation]
//! backend = "http"                  # "http" | "ollama" | "template"
//! endpoint = "http://localhost:8080/explain"   # default depends on backend
//! model = "medgemma"                # ollama only
//! timeout_secs = 30
//! api_key_env = "INSIGHT_API_KEY"   # http only
//!
//! [logging]
//! filter = "info"
//! file = "insight-tui.log"          # tui only
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which text-generation backend answers explain requests.
///
/// Written in TOML as a kebab-case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// POST `{prediction, factors}` JSON, receive `{explanation}`.
    Http,
    /// Local Ollama instance, `/api/generate`.
    Ollama,
    /// Deterministic local narrative built from the factor weights.
    Template,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Http => "http",
            Backend::Ollama => "ollama",
            Backend::Template => "template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationSettings {
    pub backend: Backend,

    /// Full URL for `http`; base URL for `ollama`. Unset means the
    /// backend's local default.
    pub endpoint: Option<String>,

    /// Model name passed to Ollama. Ignored by the other backends.
    pub model: String,

    /// Upper bound on one explain call. Expiry shows the fallback sentence.
    pub timeout_secs: u64,

    /// Name of the environment variable holding a bearer token for `http`.
    /// Credentials are never written into the config file itself.
    pub api_key_env: Option<String>,
}

impl ExplanationSettings {
    pub const DEFAULT_HTTP_ENDPOINT: &'static str = "http://localhost:8080/explain";
    pub const DEFAULT_OLLAMA_ENDPOINT: &'static str = "http://localhost:11434";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// The configured endpoint, or the default for the selected backend.
    pub fn endpoint(&self) -> &str {
        match (&self.endpoint, self.backend) {
            (Some(url), _) => url.as_str(),
            (None, Backend::Ollama) => Self::DEFAULT_OLLAMA_ENDPOINT,
            (None, Backend::Http | Backend::Template) => Self::DEFAULT_HTTP_ENDPOINT,
        }
    }
}

impl Default for ExplanationSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Http,
            endpoint: None,
            model: "medgemma".to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            api_key_env: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    pub filter: String,

    /// Log file for the terminal UI, which cannot share the screen with log
    /// output. No file means no logging from the TUI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// The top-level structure deserialized from a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub explanation: ExplanationSettings,
    pub logging: LoggingSettings,
}
