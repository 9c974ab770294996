//! JSON-over-HTTP explanation backend.
//!
//! POSTs the `ExplainRequest` as JSON and expects `{ "explanation": ... }`
//! back. Anything else is an error for the requester to fold into the
//! fallback sentence.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use insight_config::ExplanationSettings;
use insight_contracts::{
    error::{InsightError, InsightResult},
    explain::{ExplainRequest, ExplainResponse},
};
use insight_core::ExplanationGenerator;

use crate::validate::parse_response;

pub struct HttpExplanationGenerator {
    endpoint: String,
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl HttpExplanationGenerator {
    pub fn new(endpoint: &str, timeout_secs: u64) -> InsightResult<Self> {
        Ok(Self {
            endpoint: endpoint.to_string(),
            client: build_client(timeout_secs)?,
            api_key: None,
            timeout_secs,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build from the `[explanation]` table.
    ///
    /// When `api_key_env` names a variable that is not set, requests go out
    /// unauthenticated and a warning is logged.
    pub fn from_settings(settings: &ExplanationSettings) -> InsightResult<Self> {
        let generator = Self::new(settings.endpoint(), settings.timeout_secs)?;
        let Some(var) = settings.api_key_env.as_deref() else {
            return Ok(generator);
        };
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(generator.with_api_key(key)),
            _ => {
                warn!(env = var, "api key variable not set, sending unauthenticated requests");
                Ok(generator)
            }
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExplanationGenerator for HttpExplanationGenerator {
    fn generate(&self, request: &ExplainRequest) -> InsightResult<ExplainResponse> {
        debug!(endpoint = %self.endpoint, prediction = %request.prediction, "posting explain request");

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .map_err(|e| map_send_error(e, &self.endpoint, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(InsightError::ExplanationUnavailable {
                reason: format!("{} answered {}: {}", self.endpoint, status.as_u16(), body),
            });
        }

        let body: Value = response.json().map_err(|e| InsightError::MalformedResponse {
            reason: e.to_string(),
        })?;

        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

pub(crate) fn build_client(timeout_secs: u64) -> InsightResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| InsightError::ConfigError {
            reason: format!("failed to create HTTP client: {e}"),
        })
}

pub(crate) fn map_send_error(error: reqwest::Error, endpoint: &str, timeout_secs: u64) -> InsightError {
    if error.is_timeout() {
        InsightError::Timeout {
            after_secs: timeout_secs,
        }
    } else if error.is_connect() {
        InsightError::ExplanationUnavailable {
            reason: format!("cannot connect to {endpoint}"),
        }
    } else {
        InsightError::ExplanationUnavailable {
            reason: error.to_string(),
        }
    }
}
