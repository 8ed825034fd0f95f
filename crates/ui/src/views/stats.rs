use dioxus::prelude::*;

#[component]
pub fn StatsRow(consultations: u64, badges: usize, last_confidence: String) -> Element {
    rsx! {
        section { class: "stats-row",
            div { class: "stat",
                span { class: "stat-value", "{consultations}" }
                span { class: "stat-label", "Consultations" }
            }
            div { class: "stat",
                span { class: "stat-value", "{badges}" }
                span { class: "stat-label", "Badges Earned" }
            }
            div { class: "stat",
                span { class: "stat-value", "{last_confidence}" }
                span { class: "stat-label", "Last Confidence" }
            }
        }
    }
}
