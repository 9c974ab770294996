//! Prompt rendering for generators that take free text.

use insight_contracts::explain::ExplainRequest;

/// Rendered ahead of the request-specific part of every prompt.
pub const PROMPT_PREAMBLE: &str = "You are an AI assistant that explains medical risk predictions to doctors.\n\n\
Given a risk prediction and the factors that contributed to it, generate a human-readable explanation of why the prediction was made.";

/// Render the generator prompt for `request`.
///
/// Factors are listed in key order with their raw weights; the model is left
/// to interpret them.
pub fn render_prompt(request: &ExplainRequest) -> String {
    let mut prompt = String::with_capacity(256 + request.factors.len() * 32);
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str("\n\nPrediction: ");
    prompt.push_str(&request.prediction);
    prompt.push_str("\n\nContributing Factors:\n");
    for (factor, weight) in request.factors.iter() {
        prompt.push_str(&format!("- {}: {}\n", factor, weight));
    }
    prompt.push_str("\nExplanation: ");
    prompt
}

#[cfg(test)]
mod tests {
    use insight_contracts::risk::FactorMap;

    use super::*;

    #[test]
    fn prompt_names_prediction_and_every_factor() {
        let request = ExplainRequest::new(
            "Cardiovascular Disease",
            [("Blood Pressure", 0.4), ("Cholesterol", 0.3), ("Smoker", 0.2), ("Age", 0.1)]
                .into_iter()
                .collect(),
        );
        let prompt = render_prompt(&request);

        assert!(prompt.starts_with(PROMPT_PREAMBLE));
        assert!(prompt.contains("Prediction: Cardiovascular Disease"));
        assert!(prompt.contains("- Blood Pressure: 0.4\n"));
        assert!(prompt.contains("- Cholesterol: 0.3\n"));
        assert!(prompt.contains("- Smoker: 0.2\n"));
        assert!(prompt.contains("- Age: 0.1\n"));
        assert!(prompt.trim_end().ends_with("Explanation:"));
    }

    #[test]
    fn empty_factor_map_still_renders() {
        let prompt = render_prompt(&ExplainRequest::new("Diabetes", FactorMap::new()));
        assert!(prompt.contains("Contributing Factors:\n\nExplanation:"));
    }
}
