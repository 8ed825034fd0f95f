use std::sync::Arc;

use bimari_core::model::{BadgeId, BadgeSet, ConsultationCount, Progress};
use tracing::warn;

use crate::repository::{KeyValueRepository, StorageError};

/// Entry holding the consultation counter as a decimal string.
pub const CONSULTATIONS_KEY: &str = "bimaribot-consultations";
/// Entry holding unlocked badge ids as a JSON array of strings.
pub const BADGES_KEY: &str = "bimaribot-badges";

/// Durable home of the consultation counter and unlocked badges.
///
/// Reads never fail; an entry that is missing or cannot be parsed reads as its
/// default.
#[derive(Clone)]
pub struct ProgressStore {
    entries: Arc<dyn KeyValueRepository>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(entries: Arc<dyn KeyValueRepository>) -> Self {
        Self { entries }
    }

    pub async fn load(&self) -> Progress {
        let count = match self.read(CONSULTATIONS_KEY).await {
            Some(raw) => parse_count(&raw),
            None => ConsultationCount::ZERO,
        };
        let badges = match self.read(BADGES_KEY).await {
            Some(raw) => parse_badges(&raw),
            None => BadgeSet::new(),
        };
        Progress::new(count, badges)
    }

    /// Overwrite both entries. The two writes are independent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either entry cannot be written.
    pub async fn save(&self, progress: &Progress) -> Result<(), StorageError> {
        let badges = serde_json::to_string(&progress.badges.to_tokens())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.entries
            .set(CONSULTATIONS_KEY, &progress.count.value().to_string())
            .await?;
        self.entries.set(BADGES_KEY, &badges).await
    }

    /// Remove both entries, returning the store to its first-run state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either entry cannot be removed.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.entries.remove(CONSULTATIONS_KEY).await?;
        self.entries.remove(BADGES_KEY).await
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.entries.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "progress entry unreadable, using default");
                None
            }
        }
    }
}

fn parse_count(raw: &str) -> ConsultationCount {
    match raw.trim().parse::<u64>() {
        Ok(value) => ConsultationCount::new(value),
        Err(err) => {
            warn!(raw, error = %err, "corrupt consultation count, resetting to 0");
            ConsultationCount::ZERO
        }
    }
}

fn parse_badges(raw: &str) -> BadgeSet {
    let tokens: Vec<String> = match serde_json::from_str(raw) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!(error = %err, "corrupt badge list, resetting to empty");
            return BadgeSet::new();
        }
    };

    tokens
        .iter()
        .filter_map(|token| match token.parse::<BadgeId>() {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "dropping unknown badge");
                None
            }
        })
        .collect()
}
