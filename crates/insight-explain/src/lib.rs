//! # insight-explain
//!
//! Narrative explanations for risk predictions.
//!
//! `ExplanationRequester` is the only entry point the dashboard uses. It
//! sends an `ExplainRequest` to one of three backends:
//!
//! | Backend    | Transport                        |
//! |------------|----------------------------------|
//! | `http`     | POST JSON to a configured URL    |
//! | `ollama`   | local Ollama `/api/generate`     |
//! | `template` | none, built from factor weights  |
//!
//! and always hands back something displayable. Responses are validated
//! against a JSON Schema before their text is trusted; transport failures,
//! bad statuses, malformed bodies, blank text, and timeouts all become the
//! fixed fallback sentence.

pub mod http;
pub mod mock;
pub mod ollama;
pub mod prompt;
pub mod requester;
pub mod template;
pub mod validate;

#[cfg(test)]
mod test_server;

pub use http::HttpExplanationGenerator;
pub use mock::{MockBehaviour, MockGenerator};
pub use ollama::OllamaExplanationGenerator;
pub use requester::ExplanationRequester;
pub use template::TemplateGenerator;
