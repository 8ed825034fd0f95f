use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of an unlockable badge.
///
/// `as_str` / `FromStr` is the only string form; it is what gets persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeId {
    FirstConsultation,
    HealthSeeker,
    WellnessWarrior,
    ConfidentDiagnosis,
}

impl BadgeId {
    pub const ALL: [BadgeId; 4] = [
        BadgeId::FirstConsultation,
        BadgeId::HealthSeeker,
        BadgeId::WellnessWarrior,
        BadgeId::ConfidentDiagnosis,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeId::FirstConsultation => "first-consultation",
            BadgeId::HealthSeeker => "health-seeker",
            BadgeId::WellnessWarrior => "wellness-warrior",
            BadgeId::ConfidentDiagnosis => "confident-diagnosis",
        }
    }

    /// Static presentation data for this badge.
    #[must_use]
    pub fn definition(self) -> &'static BadgeDefinition {
        let index = match self {
            BadgeId::FirstConsultation => 0,
            BadgeId::HealthSeeker => 1,
            BadgeId::WellnessWarrior => 2,
            BadgeId::ConfidentDiagnosis => 3,
        };
        &BADGE_CATALOG[index]
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown badge id: {0}")]
pub struct UnknownBadgeId(pub String);

impl FromStr for BadgeId {
    type Err = UnknownBadgeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownBadgeId(s.to_string()))
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Rarity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
}

pub static BADGE_CATALOG: [BadgeDefinition; 4] = [
    BadgeDefinition {
        id: BadgeId::FirstConsultation,
        icon: "🎯",
        title: "First Steps",
        description: "Completed your first health consultation",
        rarity: Rarity::Common,
    },
    BadgeDefinition {
        id: BadgeId::HealthSeeker,
        icon: "🔍",
        title: "Health Seeker",
        description: "Used BIMARIBOT 5 times",
        rarity: Rarity::Uncommon,
    },
    BadgeDefinition {
        id: BadgeId::WellnessWarrior,
        icon: "🛡️",
        title: "Wellness Warrior",
        description: "Reached 10 consultations",
        rarity: Rarity::Rare,
    },
    BadgeDefinition {
        id: BadgeId::ConfidentDiagnosis,
        icon: "🎖️",
        title: "High Confidence",
        description: "Received a diagnosis with >80% confidence",
        rarity: Rarity::Epic,
    },
];

/// Unlocked badges in the order they were earned. Never shrinks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadgeSet(Vec<BadgeId>);

impl BadgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ids, keeping the first occurrence of each.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = BadgeId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: BadgeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    #[must_use]
    pub fn contains(&self, id: BadgeId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BadgeId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BadgeId] {
        &self.0
    }

    /// Persisted string tokens, in insertion order.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<&'static str> {
        self.0.iter().map(|id| id.as_str()).collect()
    }
}

impl FromIterator<BadgeId> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = BadgeId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

/// A consultation-count goal shown as a progress bar. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub icon: &'static str,
    pub title: &'static str,
    pub target: u64,
}

impl Milestone {
    #[must_use]
    pub fn is_completed(&self, count: u64) -> bool {
        count >= self.target
    }

    /// Percentage towards the target, capped at 100.
    #[must_use]
    pub fn percent(&self, count: u64) -> u8 {
        if self.target == 0 || count >= self.target {
            return 100;
        }
        // count < target here, so the quotient is below 100.
        u8::try_from(count * 100 / self.target).unwrap_or(100)
    }
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        icon: "👑",
        title: "Health Master",
        target: 25,
    },
    Milestone {
        icon: "🏆",
        title: "Diagnosis Expert",
        target: 50,
    },
    Milestone {
        icon: "💎",
        title: "Wellness Legend",
        target: 100,
    },
];
