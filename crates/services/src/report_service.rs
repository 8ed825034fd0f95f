use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use bimari_core::Clock;
use bimari_core::model::{ConfidenceLevel, PredictionResult, score_percent};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::ReportError;

pub const DISCLAIMER: &str = "This is an AI-powered analysis and should not replace professional \
medical advice. Please consult with a healthcare provider for proper diagnosis and treatment.";

/// Writes plain-text reports of a prediction to a directory.
#[derive(Clone, Debug)]
pub struct ReportService {
    clock: Clock,
    dir: PathBuf,
}

impl ReportService {
    #[must_use]
    pub fn new(clock: Clock, dir: impl Into<PathBuf>) -> Self {
        Self {
            clock,
            dir: dir.into(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a report for `prediction` and return its path.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Io` if the directory or file cannot be written.
    pub fn save(&self, prediction: &PredictionResult) -> Result<PathBuf, ReportError> {
        let now = self.clock.now();
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("bimaribot-report-{}.txt", now.format("%Y%m%d-%H%M%S")));
        fs::write(&path, render_report(prediction, now))?;
        info!(path = %path.display(), "report saved");
        Ok(path)
    }
}

#[must_use]
pub fn render_report(prediction: &PredictionResult, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    // fmt::Write into a String only fails on allocation failure.
    if write_report(&mut out, prediction, generated_at).is_err() {
        out.clear();
    }
    out
}

fn write_report(
    out: &mut String,
    prediction: &PredictionResult,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    let level = ConfidenceLevel::from_score(prediction.confidence);

    writeln!(out, "BIMARIBOT Diagnosis Report")?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out)?;
    writeln!(
        out,
        "Primary diagnosis: {} ({}%, {})",
        prediction.disease,
        score_percent(prediction.confidence),
        level.label()
    )?;

    let alternatives = prediction.alternatives();
    if !alternatives.is_empty() {
        writeln!(out)?;
        writeln!(out, "Other possibilities:")?;
        for alt in alternatives {
            writeln!(out, "  - {}: {}%", alt.label, score_percent(alt.score))?;
        }
    }

    if !prediction.precautions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recommended precautions:")?;
        for (index, precaution) in prediction.precautions.iter().enumerate() {
            writeln!(out, "  {}. {precaution}", index + 1)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Medical disclaimer: {DISCLAIMER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bimari_core::model::RankedPrediction;
    use bimari_core::time::fixed_now;

    fn prediction() -> PredictionResult {
        PredictionResult {
            disease: "Migraine".into(),
            confidence: 0.72,
            top_predictions: vec![
                RankedPrediction {
                    label: "Migraine".into(),
                    score: 0.72,
                },
                RankedPrediction {
                    label: "Tension headache".into(),
                    score: 0.2,
                },
            ],
            precautions: vec!["meditation".into(), "reduce stress".into()],
        }
    }

    #[test]
    fn report_lists_diagnosis_alternatives_and_precautions() {
        let text = render_report(&prediction(), fixed_now());
        assert!(text.contains("Generated: 2023-11-14 22:13:20 UTC"));
        assert!(text.contains("Primary diagnosis: Migraine (72%, Moderate Confidence)"));
        assert!(text.contains("  - Tension headache: 20%"));
        assert!(!text.contains("  - Migraine"));
        assert!(text.contains("  2. reduce stress"));
        assert!(text.contains("Medical disclaimer:"));
    }

    #[test]
    fn report_without_alternatives_or_precautions_keeps_disclaimer() {
        let bare = PredictionResult {
            disease: "Acne".into(),
            confidence: 0.95,
            top_predictions: Vec::new(),
            precautions: Vec::new(),
        };
        let text = render_report(&bare, fixed_now());
        assert!(text.contains("Primary diagnosis: Acne (95%, High Confidence)"));
        assert!(!text.contains("Other possibilities:"));
        assert!(!text.contains("Recommended precautions:"));
        assert!(text.ends_with(&format!("Medical disclaimer: {DISCLAIMER}\n")));
    }

    #[test]
    fn save_writes_timestamped_file() {
        let dir = std::env::temp_dir().join(format!("bimaribot-report-test-{}", std::process::id()));
        let service = ReportService::new(Clock::fixed(fixed_now()), &dir);
        let path = service.save(&prediction()).unwrap();

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("bimaribot-report-20231114-221320.txt")
        );
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("BIMARIBOT Diagnosis Report"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
