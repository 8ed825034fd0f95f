use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bimari_core::model::{PredictionResult, RankedPrediction, ServiceSettings, Symptoms};

use crate::error::PredictionError;

/// The external prediction service, seen from the client.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Ask the service for a diagnosis of `symptoms`.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError` if the service is unreachable, answers with
    /// a non-success status, times out, or sends an unreadable body.
    async fn predict(&self, symptoms: &Symptoms) -> Result<PredictionResult, PredictionError>;
}

/// `Predictor` that POSTs JSON to a single HTTP endpoint.
#[derive(Clone)]
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    /// Build a client with the endpoint and request timeout from `settings`.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be constructed.
    pub fn new(settings: &ServiceSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: settings.predict_url().to_string(),
        })
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, symptoms: &Symptoms) -> Result<PredictionResult, PredictionError> {
        debug!(endpoint = %self.endpoint, "sending prediction request");
        let payload = PredictRequest {
            symptoms: symptoms.as_str(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(PredictionError::HttpStatus(response.status()));
        }

        let body: PredictResponse = response.json().await.map_err(classify)?;
        Ok(body.into())
    }
}

fn classify(err: reqwest::Error) -> PredictionError {
    if err.is_timeout() {
        PredictionError::Timeout
    } else {
        PredictionError::Http(err)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    symptoms: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(rename = "Predicted Disease")]
    predicted_disease: String,
    #[serde(rename = "Confidence")]
    confidence: f64,
    #[serde(rename = "Top Predictions", default)]
    top_predictions: Vec<(String, f64)>,
    #[serde(rename = "Precautions", default)]
    precautions: Vec<String>,
}

impl From<PredictResponse> for PredictionResult {
    fn from(body: PredictResponse) -> Self {
        Self {
            disease: body.predicted_disease,
            confidence: body.confidence,
            top_predictions: body
                .top_predictions
                .into_iter()
                .map(|(label, score)| RankedPrediction { label, score })
                .collect(),
            precautions: body.precautions,
        }
    }
}
