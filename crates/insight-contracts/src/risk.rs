//! Risk assessment types and the risk presentation mapping.
//!
//! Every patient carries exactly three assessments. Each one is an immutable
//! triple of score, severity level, and contributing-factor weights.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, InsightResult};

/// One of the four ordered severity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Every level, lowest severity first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Badge text, e.g. "High Risk".
    pub fn badge_label(self) -> String {
        format!("{} Risk", self.as_str())
    }

    /// Map the level to its visual treatment.
    ///
    /// Exhaustive over the four levels: adding a level is a compile error
    /// here until it is given a colour and badge.
    pub fn treatment(self) -> RiskTreatment {
        match self {
            RiskLevel::Low => RiskTreatment {
                color: RiskColor::Green,
                badge: BadgeVariant::Default,
            },
            RiskLevel::Medium => RiskTreatment {
                color: RiskColor::Yellow,
                badge: BadgeVariant::Default,
            },
            RiskLevel::High => RiskTreatment {
                color: RiskColor::Orange,
                badge: BadgeVariant::Destructive,
            },
            RiskLevel::Critical => RiskTreatment {
                color: RiskColor::Red,
                badge: BadgeVariant::Destructive,
            },
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour bound to a severity level. Drives both the badge and the score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskColor {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Badge emphasis. `Default` covers both the neutral and the caution badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeVariant {
    Default,
    Destructive,
}

/// The complete visual treatment for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskTreatment {
    pub color: RiskColor,
    pub badge: BadgeVariant,
}

impl RiskTreatment {
    pub fn is_destructive(&self) -> bool {
        self.badge == BadgeVariant::Destructive
    }
}

/// A risk score out of 100.
///
/// Values above 100 are rejected on construction and on deserialization, so
/// rendering always yields an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> InsightResult<Self> {
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction of the full scale, for gauges.
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl TryFrom<u8> for Score {
    type Error = InsightError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(InsightError::InvalidRecords {
                reason: format!("risk score {} is above {}", value, Self::MAX),
            });
        }
        Ok(Self(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Renders as `"78/100"`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Cause name → weight. Keys are unique; weights are neither validated nor
/// required to sum to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorMap(BTreeMap<String, f64>);

impl FactorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, factor: &str) -> Option<f64> {
        self.0.get(factor).copied()
    }

    /// Factors in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Factors ordered by weight, heaviest first. Equal weights keep name order.
    pub fn by_weight(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self.iter().collect();
        sorted.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            other => other,
        });
        sorted
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FactorMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Format a factor weight as a whole percentage, e.g. `0.4` → `"40%"`.
pub fn weight_percent(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

/// A single named risk evaluation attached to a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: Score,
    pub level: RiskLevel,
    pub factors: FactorMap,
}

/// The three fixed assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentKind {
    CardiovascularDisease,
    Diabetes,
    Readmission,
}

impl AssessmentKind {
    /// Display order on the risk card.
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::CardiovascularDisease,
        AssessmentKind::Diabetes,
        AssessmentKind::Readmission,
    ];

    /// Heading shown on the risk card.
    pub fn title(self) -> &'static str {
        match self {
            AssessmentKind::CardiovascularDisease => "Cardiovascular Disease",
            AssessmentKind::Diabetes => "Diabetes",
            AssessmentKind::Readmission => "Readmission",
        }
    }

    /// Label sent to the explanation service.
    pub fn prediction_label(self) -> &'static str {
        match self {
            AssessmentKind::CardiovascularDisease => "Cardiovascular Disease",
            AssessmentKind::Diabetes => "Diabetes",
            AssessmentKind::Readmission => "Hospital Readmission",
        }
    }
}

/// Exactly three assessments per patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub cardiovascular_disease: RiskAssessment,
    pub diabetes: RiskAssessment,
    pub readmission: RiskAssessment,
}

impl RiskScores {
    pub fn get(&self, kind: AssessmentKind) -> &RiskAssessment {
        match kind {
            AssessmentKind::CardiovascularDisease => &self.cardiovascular_disease,
            AssessmentKind::Diabetes => &self.diabetes,
            AssessmentKind::Readmission => &self.readmission,
        }
    }

    /// All three assessments in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AssessmentKind, &RiskAssessment)> {
        AssessmentKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}
