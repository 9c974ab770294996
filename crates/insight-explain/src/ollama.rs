//! Local Ollama backend.
//!
//! Renders the explain prompt and sends it to `/api/generate` with streaming
//! off, taking the `response` field as the explanation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use insight_config::ExplanationSettings;
use insight_contracts::{
    error::{InsightError, InsightResult},
    explain::{ExplainRequest, ExplainResponse},
};
use insight_core::ExplanationGenerator;

use crate::{
    http::{build_client, map_send_error},
    prompt::render_prompt,
    validate::ensure_not_blank,
};

const SYSTEM_PROMPT: &str = "You explain clinical risk predictions to physicians. \
Answer in plain prose, two to four sentences, without headings or lists.";

pub struct OllamaExplanationGenerator {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaExplanationGenerator {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> InsightResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: build_client(timeout_secs)?,
            timeout_secs,
        })
    }

    pub fn from_settings(settings: &ExplanationSettings) -> InsightResult<Self> {
        Self::new(settings.endpoint(), &settings.model, settings.timeout_secs)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl ExplanationGenerator for OllamaExplanationGenerator {
    fn generate(&self, request: &ExplainRequest) -> InsightResult<ExplainResponse> {
        let url = format!("{}/api/generate", self.base_url);
        let prompt = render_prompt(request);
        debug!(%url, model = %self.model, "sending prompt to ollama");

        let body = OllamaGenerateRequest {
            model: &self.model,
            prompt: &prompt,
            system: SYSTEM_PROMPT,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| map_send_error(e, &self.base_url, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(InsightError::ExplanationUnavailable {
                reason: format!("ollama answered {}: {}", status.as_u16(), body),
            });
        }

        let parsed: OllamaGenerateResponse =
            response.json().map_err(|e| InsightError::MalformedResponse {
                reason: e.to_string(),
            })?;

        ensure_not_blank(ExplainResponse {
            explanation: parsed.response.trim().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    fn request() -> ExplainRequest {
        ExplainRequest::new("Diabetes", [("Family History", 0.5), ("BMI", 0.3)].into_iter().collect())
    }

    #[test]
    fn generate_posts_prompt_and_reads_response_field() {
        let (base, server) = serve_once("200 OK", r#"{"model":"medgemma","response":"  Family history is the main driver.\n","done":true}"#);
        let generator = OllamaExplanationGenerator::new(&base, "medgemma", 5).unwrap();

        let response = generator.generate(&request()).unwrap();
        assert_eq!(response.explanation, "Family history is the main driver.");

        let raw = server.join().unwrap();
        assert!(raw.starts_with("POST /api/generate"));
        assert!(raw.contains(r#""stream":false"#));
        assert!(raw.contains(r#""model":"medgemma""#));
        assert!(raw.contains("Prediction: Diabetes"));
    }

    #[test]
    fn blank_generation_is_malformed() {
        let (base, server) = serve_once("200 OK", r#"{"response":"   ","done":true}"#);
        let generator = OllamaExplanationGenerator::new(&base, "medgemma", 5).unwrap();

        assert!(matches!(
            generator.generate(&request()),
            Err(InsightError::MalformedResponse { .. })
        ));
        server.join().unwrap();
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let generator = OllamaExplanationGenerator::new("http://localhost:11434/", "medgemma", 5).unwrap();
        assert_eq!(generator.base_url, "http://localhost:11434");
        assert_eq!(generator.model(), "medgemma");
    }
}
