use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

pub const HEALTH_FACTS: [&str; 8] = [
    "🧠 Your brain uses 20% of your body's total energy!",
    "💖 Your heart beats about 100,000 times per day!",
    "🫁 You breathe about 20,000 times per day!",
    "🦴 Your bones are 4x stronger than concrete!",
    "👁️ Your eyes can distinguish 10 million colors!",
    "🩸 Your body produces 25 million new cells every second!",
    "🧬 You share 99.9% of your DNA with every other human!",
    "🌡️ Your body temperature is regulated to within 1°F!",
];

/// Picks the trivia line shown above the symptom form.
pub struct HealthFacts {
    rng: Mutex<StdRng>,
}

impl Default for HealthFacts {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthFacts {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic sequence, for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub fn random_fact(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        HEALTH_FACTS.choose(&mut *rng).copied().unwrap_or(HEALTH_FACTS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_come_from_the_fixed_list() {
        let facts = HealthFacts::new();
        for _ in 0..32 {
            assert!(HEALTH_FACTS.contains(&facts.random_fact()));
        }
    }

    #[test]
    fn seeded_pickers_agree() {
        let a = HealthFacts::seeded(7);
        let b = HealthFacts::seeded(7);
        let left: Vec<_> = (0..10).map(|_| a.random_fact()).collect();
        let right: Vec<_> = (0..10).map(|_| b.random_fact()).collect();
        assert_eq!(left, right);
    }
}
