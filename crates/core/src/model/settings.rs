use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Validated connection settings for the prediction service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceSettings {
    predict_url: String,
    timeout: Duration,
    report_dir: String,
}

#[derive(Clone, Debug, Default)]
pub struct ServiceSettingsDraft {
    pub predict_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub report_dir: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceSettingsError {
    #[error("invalid prediction URL: {0}")]
    InvalidPredictUrl(String),
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

impl ServiceSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset values with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ServiceSettingsError` if the URL is not an absolute http(s)
    /// URL or the timeout is zero.
    pub fn validate(self) -> Result<ServiceSettings, ServiceSettingsError> {
        let predict_url = normalize_optional(self.predict_url)
            .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());
        match Url::parse(&predict_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ServiceSettingsError::InvalidPredictUrl(predict_url)),
        }

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ServiceSettingsError::ZeroTimeout);
        }

        let report_dir = normalize_optional(self.report_dir)
            .unwrap_or_else(|| DEFAULT_REPORT_DIR.to_string());

        Ok(ServiceSettings {
            predict_url,
            timeout: Duration::from_secs(timeout_secs),
            report_dir,
        })
    }
}

impl ServiceSettings {
    #[must_use]
    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn report_dir(&self) -> &str {
        &self.report_dir
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            report_dir: DEFAULT_REPORT_DIR.to_string(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
