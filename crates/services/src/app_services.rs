use std::sync::Arc;

use bimari_core::model::ServiceSettings;
use storage::repository::Storage;

use crate::Clock;
use crate::consultation_service::ConsultationService;
use crate::error::AppServicesError;
use crate::health_facts::HealthFacts;
use crate::prediction_client::{HttpPredictor, Predictor};
use crate::report_service::ReportService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    consultations: Arc<ConsultationService>,
    health_facts: Arc<HealthFacts>,
    reports: Arc<ReportService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP predictor.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the HTTP
    /// client cannot be built.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        settings: &ServiceSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let predictor: Arc<dyn Predictor> = Arc::new(HttpPredictor::new(settings)?);
        Ok(Self::from_parts(&storage, predictor, clock, settings))
    }

    /// Build services from already-constructed parts.
    #[must_use]
    pub fn from_parts(
        storage: &Storage,
        predictor: Arc<dyn Predictor>,
        clock: Clock,
        settings: &ServiceSettings,
    ) -> Self {
        Self {
            consultations: Arc::new(ConsultationService::new(predictor, storage.progress())),
            health_facts: Arc::new(HealthFacts::new()),
            reports: Arc::new(ReportService::new(clock, settings.report_dir())),
        }
    }

    #[must_use]
    pub fn consultations(&self) -> Arc<ConsultationService> {
        Arc::clone(&self.consultations)
    }

    #[must_use]
    pub fn health_facts(&self) -> Arc<HealthFacts> {
        Arc::clone(&self.health_facts)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }
}
