use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bimari_core::AchievementEvaluator;
use bimari_core::model::{BadgeId, PredictionResult, Progress, Symptoms};
use storage::ProgressStore;
use tracing::{info, warn};

use crate::error::ConsultationError;
use crate::prediction_client::Predictor;

/// Everything the UI needs after a successful consultation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsultationOutcome {
    pub prediction: PredictionResult,
    pub progress: Progress,
    /// Badges earned by this consultation, in unlock order.
    pub unlocked: Vec<BadgeId>,
}

/// Runs one consultation: ask the predictor, then record progress.
///
/// Progress is only touched after the prediction succeeds. At most one
/// consultation is in flight at a time.
pub struct ConsultationService {
    predictor: Arc<dyn Predictor>,
    progress: ProgressStore,
    evaluator: AchievementEvaluator,
    in_flight: AtomicBool,
}

impl ConsultationService {
    #[must_use]
    pub fn new(predictor: Arc<dyn Predictor>, progress: ProgressStore) -> Self {
        Self::with_evaluator(predictor, progress, AchievementEvaluator::default())
    }

    #[must_use]
    pub fn with_evaluator(
        predictor: Arc<dyn Predictor>,
        progress: ProgressStore,
        evaluator: AchievementEvaluator,
    ) -> Self {
        Self {
            predictor,
            progress,
            evaluator,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current persisted progress. Never fails; see `ProgressStore::load`.
    pub async fn load_progress(&self) -> Progress {
        self.progress.load().await
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit raw symptom text.
    ///
    /// # Errors
    ///
    /// Returns `ConsultationError::InvalidSymptoms` for blank input,
    /// `ConsultationError::Busy` if another submission is outstanding, and
    /// `ConsultationError::Prediction` if the service call fails. Progress is
    /// left untouched in every error case.
    pub async fn submit(&self, raw: &str) -> Result<ConsultationOutcome, ConsultationError> {
        let symptoms = Symptoms::parse(raw)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(ConsultationError::Busy)?;

        let prediction = self.predictor.predict(&symptoms).await?;

        let current = self.progress.load().await;
        let evaluation = self.evaluator.evaluate(&current, prediction.confidence);
        if let Err(err) = self.progress.save(&evaluation.progress).await {
            warn!(error = %err, "failed to persist progress");
        }

        info!(
            disease = %prediction.disease,
            confidence = prediction.confidence,
            consultations = evaluation.progress.count.value(),
            unlocked = evaluation.unlocked.len(),
            "consultation completed"
        );

        Ok(ConsultationOutcome {
            prediction,
            progress: evaluation.progress,
            unlocked: evaluation.unlocked,
        })
    }

    /// Forget all progress.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be removed.
    pub async fn reset_progress(&self) -> Result<(), storage::StorageError> {
        self.progress.clear().await
    }
}

/// Holds the busy flag for the duration of one submission.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
