mod badges_vm;
mod loader_vm;
mod prediction_vm;
mod symptom_input_vm;
mod typewriter;

pub use badges_vm::{
    BadgeCardVm, BadgesPanelVm, MilestoneVm, map_badge_catalog, map_badges_panel,
    unlocked_announcement,
};
pub use loader_vm::{HEARTBEAT_INTERVAL, HEARTBEAT_PHASES, LOADER_TIPS, LoaderVm, TIP_INTERVAL};
pub use prediction_vm::{
    AlternativeVm, PrecautionVm, PredictionCardVm, confidence_emoji, last_confidence_label,
    precaution_icon,
};
pub use symptom_input_vm::{
    MAX_SYMPTOM_CHARS, QUICK_SYMPTOMS, QuickSymptom, TYPING_INDICATOR, can_submit, char_counter,
};
pub use typewriter::{PLACEHOLDER_TEXTS, Typewriter};
