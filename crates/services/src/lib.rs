#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod consultation_service;
pub mod error;
pub mod health_facts;
pub mod prediction_client;
pub mod report_service;

pub use bimari_core::Clock;

pub use app_services::AppServices;
pub use consultation_service::{ConsultationOutcome, ConsultationService};
pub use error::{AppServicesError, ConsultationError, PredictionError, ReportError};
pub use health_facts::HealthFacts;
pub use prediction_client::{HttpPredictor, Predictor};
pub use report_service::ReportService;
