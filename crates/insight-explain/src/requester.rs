//! The explanation requester.
//!
//! Wraps any `ExplanationGenerator` with a hard upper bound on how long a
//! call may take, and folds every failure into `Explanation::Fallback`.
//! Generator errors are logged here and go no further.

use std::{
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use tracing::{info, warn};

use insight_config::{Backend, ExplanationSettings};
use insight_contracts::{
    error::{InsightError, InsightResult},
    explain::{ExplainRequest, ExplainResponse, Explanation},
};
use insight_core::ExplanationGenerator;

use crate::{
    http::HttpExplanationGenerator, ollama::OllamaExplanationGenerator, template::TemplateGenerator,
    validate::ensure_not_blank,
};

#[derive(Clone)]
pub struct ExplanationRequester {
    generator: Arc<dyn ExplanationGenerator>,
    timeout: Duration,
}

impl ExplanationRequester {
    pub fn new(generator: Arc<dyn ExplanationGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Build the configured backend.
    pub fn from_settings(settings: &ExplanationSettings) -> InsightResult<Self> {
        let generator: Arc<dyn ExplanationGenerator> = match settings.backend {
            Backend::Http => Arc::new(HttpExplanationGenerator::from_settings(settings)?),
            Backend::Ollama => Arc::new(OllamaExplanationGenerator::from_settings(settings)?),
            Backend::Template => Arc::new(TemplateGenerator::new()),
        };
        info!(
            backend = generator.name(),
            endpoint = settings.endpoint(),
            timeout_secs = settings.timeout_secs,
            "explanation requester ready"
        );
        Ok(Self::new(generator, Duration::from_secs(settings.timeout_secs)))
    }

    pub fn backend(&self) -> &'static str {
        self.generator.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the generator, waiting at most `timeout`.
    ///
    /// The generator runs on its own thread. If the bound expires first the
    /// thread is left to finish on its own and its result is dropped.
    pub fn try_explain(&self, request: &ExplainRequest) -> InsightResult<ExplainResponse> {
        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(&self.generator);
        let request = request.clone();

        thread::Builder::new()
            .name("explain-generator".to_string())
            .spawn(move || {
                // The receiver is gone once the bound has expired.
                let _ = tx.send(generator.generate(&request));
            })
            .map_err(|e| InsightError::ExplanationUnavailable {
                reason: format!("failed to spawn generator thread: {e}"),
            })?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => ensure_not_blank(result?),
            Err(RecvTimeoutError::Timeout) => Err(InsightError::Timeout {
                after_secs: self.timeout.as_secs(),
            }),
            Err(RecvTimeoutError::Disconnected) => Err(InsightError::ExplanationUnavailable {
                reason: "generator thread exited without a result".to_string(),
            }),
        }
    }

    /// Produce what the clinician sees: generated text or the fallback.
    pub fn explain(&self, request: &ExplainRequest) -> Explanation {
        let started = Instant::now();
        match self.try_explain(request) {
            Ok(response) => {
                info!(
                    backend = self.backend(),
                    prediction = %request.prediction,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "explanation generated"
                );
                Explanation::Generated(response.explanation)
            }
            Err(error) => {
                warn!(
                    backend = self.backend(),
                    prediction = %request.prediction,
                    %error,
                    "explanation unavailable, showing fallback"
                );
                Explanation::Fallback
            }
        }
    }
}

impl std::fmt::Debug for ExplanationRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplanationRequester")
            .field("backend", &self.backend())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use insight_contracts::{explain::FALLBACK_EXPLANATION, risk::FactorMap};

    use super::*;
    use crate::{
        mock::MockGenerator,
        test_server::{closed_port, serve_once},
    };

    fn request() -> ExplainRequest {
        ExplainRequest::new(
            "Cardiovascular Disease",
            [("Blood Pressure", 0.4), ("Cholesterol", 0.3), ("Smoker", 0.2), ("Age", 0.1)]
                .into_iter()
                .collect(),
        )
    }

    fn requester(generator: Arc<dyn ExplanationGenerator>) -> ExplanationRequester {
        ExplanationRequester::new(generator, Duration::from_secs(2))
    }

    #[test]
    fn generated_text_is_passed_through() {
        let mock = Arc::new(MockGenerator::responding("Blood pressure is the dominant factor."));
        let explanation = requester(mock.clone()).explain(&request());

        assert_eq!(explanation, Explanation::Generated("Blood pressure is the dominant factor.".into()));
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn generator_error_becomes_fallback() {
        let mock = Arc::new(MockGenerator::failing("model offline"));
        let explanation = requester(mock.clone()).explain(&request());
        assert!(explanation.is_fallback());
        assert_eq!(explanation.text(), FALLBACK_EXPLANATION);
        assert_eq!(mock.calls(), 1, "a failed call must not be retried");
    }

    #[test]
    fn blank_text_becomes_fallback() {
        let explanation = requester(Arc::new(MockGenerator::responding("   "))).explain(&request());
        assert!(explanation.is_fallback());
    }

    #[test]
    fn slow_generator_times_out() {
        let mock = Arc::new(MockGenerator::delayed(Duration::from_millis(500), "too late"));
        let requester = ExplanationRequester::new(mock.clone(), Duration::from_millis(50));

        let started = Instant::now();
        assert!(matches!(requester.try_explain(&request()), Err(InsightError::Timeout { .. })));
        assert!(started.elapsed() < Duration::from_millis(450));
        assert_eq!(mock.calls(), 1, "a timed-out call must not be retried");

        assert!(requester.explain(&request()).is_fallback());
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn empty_factors_are_still_sent() {
        let mock = Arc::new(MockGenerator::responding("No factors were recorded."));
        let explanation = requester(mock.clone()).explain(&ExplainRequest::new("Diabetes", FactorMap::new()));
        assert!(!explanation.is_fallback());
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn unreachable_http_service_becomes_fallback() {
        let settings = ExplanationSettings {
            endpoint: Some(format!("http://127.0.0.1:{}/explain", closed_port())),
            timeout_secs: 2,
            ..ExplanationSettings::default()
        };
        let requester = ExplanationRequester::from_settings(&settings).unwrap();
        assert_eq!(requester.backend(), "http");

        let explanation = requester.explain(&request());
        assert_eq!(explanation.text(), FALLBACK_EXPLANATION);
    }

    #[test]
    fn http_server_error_becomes_fallback() {
        let (base, server) = serve_once("503 Service Unavailable", r#"{"error":"overloaded"}"#);
        let settings = ExplanationSettings {
            endpoint: Some(format!("{base}/explain")),
            timeout_secs: 5,
            ..ExplanationSettings::default()
        };
        let explanation = ExplanationRequester::from_settings(&settings).unwrap().explain(&request());

        assert!(explanation.is_fallback());
        server.join().unwrap();
    }

    #[test]
    fn http_success_yields_generated_text() {
        let (base, server) = serve_once("200 OK", r#"{"explanation":"Hypertension and cholesterol dominate."}"#);
        let settings = ExplanationSettings {
            endpoint: Some(format!("{base}/explain")),
            timeout_secs: 5,
            ..ExplanationSettings::default()
        };
        let explanation = ExplanationRequester::from_settings(&settings).unwrap().explain(&request());

        assert_eq!(explanation.text(), "Hypertension and cholesterol dominate.");
        server.join().unwrap();
    }

    #[test]
    fn template_backend_never_falls_back() {
        let settings = ExplanationSettings {
            backend: Backend::Template,
            ..ExplanationSettings::default()
        };
        let requester = ExplanationRequester::from_settings(&settings).unwrap();
        assert_eq!(requester.backend(), "template");
        assert!(!requester.explain(&request()).is_fallback());
    }
}
