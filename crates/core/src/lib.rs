#![forbid(unsafe_code)]

pub mod achievements;
pub mod model;
pub mod time;

pub use achievements::{AchievementEvaluator, AchievementRule, ConsultationEvent, Evaluation};
pub use time::Clock;
