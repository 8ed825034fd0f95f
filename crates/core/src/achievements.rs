use crate::model::{BadgeId, BadgeSet, ConsultationCount, Progress};

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// What a rule gets to look at: the count transition and the confidence of
/// the consultation that caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsultationEvent {
    pub previous: ConsultationCount,
    pub current: ConsultationCount,
    pub confidence: f64,
}

impl ConsultationEvent {
    /// True when this event moved the count from below `threshold` to at or
    /// above it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bimari_core::achievements::ConsultationEvent;
    /// # use bimari_core::model::ConsultationCount;
    /// let event = ConsultationEvent {
    ///     previous: ConsultationCount::new(3),
    ///     current: ConsultationCount::new(7),
    ///     confidence: 0.5,
    /// };
    /// assert!(event.crossed(5));
    /// assert!(!event.crossed(3));
    /// assert!(!event.crossed(8));
    /// ```
    #[must_use]
    pub fn crossed(&self, threshold: u64) -> bool {
        self.previous.value() < threshold && self.current.value() >= threshold
    }
}

//
// ─── RULES ─────────────────────────────────────────────────────────────────────
//

/// A badge and the condition that unlocks it.
#[derive(Clone, Copy)]
pub struct AchievementRule {
    pub badge: BadgeId,
    pub unlocks: fn(&ConsultationEvent) -> bool,
}

impl std::fmt::Debug for AchievementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementRule")
            .field("badge", &self.badge)
            .finish_non_exhaustive()
    }
}

/// Confidence above which a diagnosis counts as confident. Strict.
pub const CONFIDENT_DIAGNOSIS_THRESHOLD: f64 = 0.8;

/// Built-in rules. Order decides insertion order when several unlock at once.
pub const DEFAULT_RULES: &[AchievementRule] = &[
    AchievementRule {
        badge: BadgeId::FirstConsultation,
        unlocks: reached_first,
    },
    AchievementRule {
        badge: BadgeId::HealthSeeker,
        unlocks: reached_fifth,
    },
    AchievementRule {
        badge: BadgeId::WellnessWarrior,
        unlocks: reached_tenth,
    },
    AchievementRule {
        badge: BadgeId::ConfidentDiagnosis,
        unlocks: confident_result,
    },
];

fn reached_first(event: &ConsultationEvent) -> bool {
    event.crossed(1)
}

fn reached_fifth(event: &ConsultationEvent) -> bool {
    event.crossed(5)
}

fn reached_tenth(event: &ConsultationEvent) -> bool {
    event.crossed(10)
}

// NaN compares false, so a malformed confidence never unlocks this.
fn confident_result(event: &ConsultationEvent) -> bool {
    event.confidence > CONFIDENT_DIAGNOSIS_THRESHOLD
}

//
// ─── EVALUATION ────────────────────────────────────────────────────────────────
//

/// Outcome of recording one consultation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub progress: Progress,
    /// Badges added by this evaluation, in insertion order.
    pub unlocked: Vec<BadgeId>,
}

/// Applies a fixed list of rules to each completed consultation.
///
/// Pure: the same inputs always give the same output and nothing is persisted
/// here.
#[derive(Debug, Clone, Copy)]
pub struct AchievementEvaluator {
    rules: &'static [AchievementRule],
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl AchievementEvaluator {
    #[must_use]
    pub fn new(rules: &'static [AchievementRule]) -> Self {
        Self { rules }
    }

    /// Record one completed consultation with the given confidence.
    #[must_use]
    pub fn evaluate(&self, current: &Progress, confidence: f64) -> Evaluation {
        let event = ConsultationEvent {
            previous: current.count,
            current: current.count.next(),
            confidence,
        };
        self.apply(current, &event)
    }

    /// Apply an arbitrary count transition. `evaluate` is the one-step case.
    #[must_use]
    pub fn apply(&self, current: &Progress, event: &ConsultationEvent) -> Evaluation {
        let mut badges = current.badges.clone();
        let mut unlocked = Vec::new();

        for rule in self.rules {
            if (rule.unlocks)(event) && badges.insert(rule.badge) {
                unlocked.push(rule.badge);
            }
        }

        Evaluation {
            progress: Progress::new(event.current, badges),
            unlocked,
        }
    }
}

/// `(count, badges, confidence) -> (count + 1, badges ∪ unlocked)` with the
/// built-in rules.
#[must_use]
pub fn evaluate(
    count: ConsultationCount,
    badges: &BadgeSet,
    confidence: f64,
) -> (ConsultationCount, BadgeSet) {
    let current = Progress::new(count, badges.clone());
    let Evaluation { progress, .. } = AchievementEvaluator::default().evaluate(&current, confidence);
    (progress.count, progress.badges)
}
