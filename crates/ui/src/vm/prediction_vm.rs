use bimari_core::model::{ConfidenceLevel, PredictionResult, score_percent};

const PRECAUTION_ICONS: [&str; 8] = ["🏥", "💊", "🛏️", "🥗", "💧", "🚫", "⚠️", "📞"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternativeVm {
    pub label: String,
    pub percent: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecautionVm {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionCardVm {
    pub disease: String,
    pub percent: i64,
    pub level_label: &'static str,
    pub level_class: &'static str,
    pub emoji: &'static str,
    pub alternatives: Vec<AlternativeVm>,
    /// e.g. "2 more"; `None` when there are no alternatives.
    pub alternatives_label: Option<String>,
    pub precautions: Vec<PrecautionVm>,
}

impl From<&PredictionResult> for PredictionCardVm {
    fn from(prediction: &PredictionResult) -> Self {
        let level = ConfidenceLevel::from_score(prediction.confidence);
        let alternatives = prediction
            .alternatives()
            .iter()
            .map(|ranked| AlternativeVm {
                label: ranked.label.clone(),
                percent: score_percent(ranked.score),
            })
            .collect::<Vec<_>>();
        let alternatives_label =
            (!alternatives.is_empty()).then(|| format!("{} more", alternatives.len()));
        let precautions = prediction
            .precautions
            .iter()
            .enumerate()
            .map(|(index, text)| PrecautionVm {
                icon: precaution_icon(index),
                text: text.clone(),
            })
            .collect();

        Self {
            disease: prediction.disease.clone(),
            percent: score_percent(prediction.confidence),
            level_label: level.label(),
            level_class: match level {
                ConfidenceLevel::High => "high",
                ConfidenceLevel::Moderate => "moderate",
                ConfidenceLevel::Low => "low",
            },
            emoji: confidence_emoji(prediction.confidence),
            alternatives,
            alternatives_label,
            precautions,
        }
    }
}

#[must_use]
pub fn confidence_emoji(score: f64) -> &'static str {
    if score >= 0.9 {
        "🎯"
    } else if score >= 0.8 {
        "✅"
    } else if score >= 0.6 {
        "⚠️"
    } else {
        "❓"
    }
}

/// Icons cycle when there are more precautions than icons.
#[must_use]
pub fn precaution_icon(index: usize) -> &'static str {
    PRECAUTION_ICONS[index % PRECAUTION_ICONS.len()]
}

#[must_use]
pub fn last_confidence_label(prediction: Option<&PredictionResult>) -> String {
    prediction.map_or_else(
        || "--".to_string(),
        |prediction| format!("{}%", score_percent(prediction.confidence)),
    )
}

#[cfg(test)]
mod tests {
    use bimari_core::model::RankedPrediction;

    use super::*;

    fn prediction(confidence: f64, ranked: &[(&str, f64)], precautions: usize) -> PredictionResult {
        PredictionResult {
            disease: "Influenza".to_string(),
            confidence,
            top_predictions: ranked
                .iter()
                .map(|(label, score)| RankedPrediction {
                    label: (*label).to_string(),
                    score: *score,
                })
                .collect(),
            precautions: (0..precautions).map(|i| format!("step {i}")).collect(),
        }
    }

    #[test]
    fn card_maps_level_emoji_and_percent() {
        let vm = PredictionCardVm::from(&prediction(0.874, &[], 0));
        assert_eq!(vm.percent, 87);
        assert_eq!(vm.level_label, "High Confidence");
        assert_eq!(vm.level_class, "high");
        assert_eq!(vm.emoji, "✅");
        assert!(vm.alternatives_label.is_none());

        let vm = PredictionCardVm::from(&prediction(0.65, &[], 0));
        assert_eq!(vm.level_class, "moderate");
        assert_eq!(vm.emoji, "⚠️");
    }

    #[test]
    fn alternatives_skip_the_primary_prediction() {
        let vm = PredictionCardVm::from(&prediction(
            0.7,
            &[("Influenza", 0.7), ("Common Cold", 0.2), ("Allergy", 0.05)],
            0,
        ));
        assert_eq!(vm.alternatives_label.as_deref(), Some("2 more"));
        assert_eq!(
            vm.alternatives,
            vec![
                AlternativeVm {
                    label: "Common Cold".to_string(),
                    percent: 20,
                },
                AlternativeVm {
                    label: "Allergy".to_string(),
                    percent: 5,
                },
            ]
        );
    }

    #[test]
    fn precaution_icons_cycle() {
        let vm = PredictionCardVm::from(&prediction(0.5, &[], 10));
        assert_eq!(vm.precautions[0].icon, "🏥");
        assert_eq!(vm.precautions[8].icon, "🏥");
        assert_eq!(vm.precautions[9].icon, "💊");
    }

    #[test]
    fn emoji_buckets() {
        assert_eq!(confidence_emoji(0.95), "🎯");
        assert_eq!(confidence_emoji(0.9), "🎯");
        assert_eq!(confidence_emoji(0.59), "❓");
        assert_eq!(confidence_emoji(f64::NAN), "❓");
    }

    #[test]
    fn last_confidence_defaults_to_dashes() {
        assert_eq!(last_confidence_label(None), "--");
        assert_eq!(last_confidence_label(Some(&prediction(0.426, &[], 0))), "43%");
    }
}
