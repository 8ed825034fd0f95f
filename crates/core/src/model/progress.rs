use std::fmt;

use crate::model::BadgeSet;

/// Number of completed consultations for this client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConsultationCount(u64);

impl ConsultationCount {
    pub const ZERO: ConsultationCount = ConsultationCount(0);

    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The count after one more completed consultation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ConsultationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the durable progress state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub count: ConsultationCount,
    pub badges: BadgeSet,
}

impl Progress {
    #[must_use]
    pub fn new(count: ConsultationCount, badges: BadgeSet) -> Self {
        Self { count, badges }
    }

    /// True before the first consultation and with nothing unlocked.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.count == ConsultationCount::ZERO && self.badges.is_empty()
    }
}
