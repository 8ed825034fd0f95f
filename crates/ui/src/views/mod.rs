mod badges;
mod header;
mod home;
mod loader;
mod prediction_card;
mod state;
mod stats;
mod symptom_input;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use badges::{BadgeDetail, BadgesPanel, BadgesView};
pub use header::Header;
pub use home::HomeView;
pub use loader::Loader;
pub use prediction_card::PredictionCard;
pub use state::{SubmitState, Theme, ViewError, ViewState, view_state_from_resource};
pub use stats::StatsRow;
pub use symptom_input::SymptomInput;
