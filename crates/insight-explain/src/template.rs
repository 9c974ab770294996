//! Deterministic narrative backend.
//!
//! Builds the explanation locally from the factor weights. No network, so
//! it never fails; useful for demos and for running the dashboard without a
//! model server.

use insight_contracts::{
    error::InsightResult,
    explain::{ExplainRequest, ExplainResponse},
    risk::weight_percent,
};
use insight_core::ExplanationGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Compose the narrative for `request`.
    pub fn narrate(request: &ExplainRequest) -> String {
        let ranked = request.factors.by_weight();
        let Some(((lead, lead_weight), rest)) = ranked.split_first() else {
            return format!(
                "No contributing factors were recorded for the {} risk prediction, \
                 so it cannot be attributed to specific findings.",
                request.prediction
            );
        };

        let mut text = format!(
            "The {} risk prediction is driven mainly by {} ({} of the weighting)",
            request.prediction,
            lead.to_lowercase(),
            weight_percent(*lead_weight)
        );

        match rest {
            [] => text.push('.'),
            [(only, weight)] => {
                text.push_str(&format!(", followed by {} ({}).", only.to_lowercase(), weight_percent(*weight)));
            }
            [init @ .., (last, last_weight)] => {
                let listed: Vec<String> = init
                    .iter()
                    .map(|(name, weight)| format!("{} ({})", name.to_lowercase(), weight_percent(*weight)))
                    .collect();
                text.push_str(&format!(
                    ", followed by {} and {} ({}).",
                    listed.join(", "),
                    last.to_lowercase(),
                    weight_percent(*last_weight)
                ));
            }
        }

        text.push_str(" Addressing the leading factor is likely to have the largest effect on this risk.");
        text
    }
}

impl ExplanationGenerator for TemplateGenerator {
    fn generate(&self, request: &ExplainRequest) -> InsightResult<ExplainResponse> {
        Ok(ExplainResponse {
            explanation: Self::narrate(request),
        })
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use insight_contracts::risk::FactorMap;

    use super::*;

    #[test]
    fn narrative_ranks_factors_by_weight() {
        let request = ExplainRequest::new(
            "Cardiovascular Disease",
            [("Age", 0.1), ("Smoker", 0.2), ("Blood Pressure", 0.4), ("Cholesterol", 0.3)]
                .into_iter()
                .collect(),
        );
        let text = TemplateGenerator::narrate(&request);

        assert!(text.starts_with(
            "The Cardiovascular Disease risk prediction is driven mainly by blood pressure (40% of the weighting), \
             followed by cholesterol (30%), smoker (20%) and age (10%)."
        ), "unexpected narrative: {text}");
    }

    #[test]
    fn two_factor_narrative() {
        let request = ExplainRequest::new("Diabetes", [("BMI", 0.7), ("Family History", 0.3)].into_iter().collect());
        let text = TemplateGenerator::narrate(&request);
        assert!(text.contains("bmi (70% of the weighting), followed by family history (30%)."));
    }

    #[test]
    fn empty_factors_still_produce_text() {
        let response = TemplateGenerator::new()
            .generate(&ExplainRequest::new("Hospital Readmission", FactorMap::new()))
            .unwrap();
        assert!(response.explanation.contains("No contributing factors"));
        assert!(response.explanation.contains("Hospital Readmission"));
    }
}
