use std::sync::Arc;

use services::{AppServices, ConsultationService, HealthFacts, ReportService};

pub trait UiApp: Send + Sync {
    fn consultations(&self) -> Arc<ConsultationService>;
    fn health_facts(&self) -> Arc<HealthFacts>;
    fn reports(&self) -> Arc<ReportService>;
}

impl UiApp for AppServices {
    fn consultations(&self) -> Arc<ConsultationService> {
        AppServices::consultations(self)
    }

    fn health_facts(&self) -> Arc<HealthFacts> {
        AppServices::health_facts(self)
    }

    fn reports(&self) -> Arc<ReportService> {
        AppServices::reports(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    consultations: Arc<ConsultationService>,
    health_facts: Arc<HealthFacts>,
    reports: Arc<ReportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            consultations: app.consultations(),
            health_facts: app.health_facts(),
            reports: app.reports(),
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

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
