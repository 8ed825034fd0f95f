/// One ranked alternative from the prediction service.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPrediction {
    pub label: String,
    pub score: f64,
}

/// Result of a single consultation, as returned by the prediction service.
///
/// `top_predictions` is ordered best first; its first entry normally repeats
/// `disease`.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub disease: String,
    pub confidence: f64,
    pub top_predictions: Vec<RankedPrediction>,
    pub precautions: Vec<String>,
}

impl PredictionResult {
    /// Ranked predictions after the primary one.
    #[must_use]
    pub fn alternatives(&self) -> &[RankedPrediction] {
        self.top_predictions.get(1..).unwrap_or(&[])
    }
}

/// Coarse bucket used for labelling a confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.6 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High Confidence",
            ConfidenceLevel::Moderate => "Moderate Confidence",
            ConfidenceLevel::Low => "Low Confidence",
        }
    }
}

/// Score as a rounded whole percentage. Non-finite scores read as 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn score_percent(score: f64) -> i64 {
    if score.is_finite() {
        (score * 100.0).round() as i64
    } else {
        0
    }
}
