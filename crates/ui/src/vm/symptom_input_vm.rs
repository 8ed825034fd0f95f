use std::time::Duration;

pub const MAX_SYMPTOM_CHARS: usize = 500;

/// How long "Processing..." stays up after the last keystroke.
pub const TYPING_INDICATOR: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickSymptom {
    pub icon: &'static str,
    pub name: &'static str,
}

pub const QUICK_SYMPTOMS: [QuickSymptom; 8] = [
    QuickSymptom { icon: "🤒", name: "Fever" },
    QuickSymptom { icon: "😷", name: "Cough" },
    QuickSymptom { icon: "🤧", name: "Cold" },
    QuickSymptom { icon: "😵", name: "Headache" },
    QuickSymptom { icon: "🤢", name: "Nausea" },
    QuickSymptom { icon: "😰", name: "Fatigue" },
    QuickSymptom { icon: "💔", name: "Chest Pain" },
    QuickSymptom { icon: "🦵", name: "Body Ache" },
];

#[must_use]
pub fn char_counter(text: &str) -> String {
    format!("{}/{MAX_SYMPTOM_CHARS}", text.chars().count())
}

#[must_use]
pub fn can_submit(text: &str, busy: bool) -> bool {
    !busy && !text.trim().is_empty()
}
