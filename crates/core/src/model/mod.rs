mod badge;
mod prediction;
mod progress;
mod settings;
mod symptoms;

pub use badge::{
    BADGE_CATALOG, BadgeDefinition, BadgeId, BadgeSet, MILESTONES, Milestone, Rarity,
    UnknownBadgeId,
};
pub use prediction::{ConfidenceLevel, PredictionResult, RankedPrediction, score_percent};
pub use progress::{ConsultationCount, Progress};
pub use settings::{
    DEFAULT_PREDICT_URL, DEFAULT_REPORT_DIR, DEFAULT_TIMEOUT_SECS, ServiceSettings,
    ServiceSettingsDraft, ServiceSettingsError,
};
pub use symptoms::{SymptomError, Symptoms, append_quick_symptom};
