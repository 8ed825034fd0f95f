use bimari_core::model::PredictionResult;
use dioxus::prelude::*;
use services::report_service::DISCLAIMER;
use tracing::warn;

use crate::context::AppContext;
use crate::vm::PredictionCardVm;

#[component]
pub fn PredictionCard(prediction: PredictionResult, on_reset: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();
    let mut show_alternatives = use_signal(|| false);
    let mut report_status = use_signal(|| None::<String>);

    let vm = PredictionCardVm::from(&prediction);
    let expanded = show_alternatives();

    rsx! {
        section { class: "prediction-card card level-{vm.level_class}",
            div { class: "prediction-header",
                span { class: "prediction-emoji", "{vm.emoji}" }
                div {
                    p { class: "prediction-caption", "Most likely condition" }
                    h2 { class: "prediction-disease", "{vm.disease}" }
                }
            }

            div { class: "confidence",
                div { class: "confidence-row",
                    span { class: "confidence-level", "{vm.level_label}" }
                    span { class: "confidence-value", "{vm.percent}%" }
                }
                div { class: "bar",
                    div { class: "bar-fill", style: "width: {vm.percent}%" }
                }
            }

            if let Some(label) = vm.alternatives_label.clone() {
                div { class: "alternatives",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| show_alternatives.set(!expanded),
                        if expanded { "Hide other possibilities" } else { "Other possibilities ({label})" }
                    }
                    if expanded {
                        ul {
                            for alternative in vm.alternatives.clone() {
                                li { key: "{alternative.label}",
                                    span { "{alternative.label}" }
                                    span { class: "alt-score", "{alternative.percent}%" }
                                }
                            }
                        }
                    }
                }
            }

            if !vm.precautions.is_empty() {
                div { class: "precautions",
                    h3 { "Recommended Precautions" }
                    ul {
                        for (index, precaution) in vm.precautions.clone().into_iter().enumerate() {
                            li { key: "{index}",
                                span { class: "precaution-icon", "{precaution.icon}" }
                                span { "{precaution.text}" }
                            }
                        }
                    }
                }
            }

            p { class: "disclaimer", "⚠️ {DISCLAIMER}" }

            div { class: "card-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let status = match reports.save(&prediction) {
                            Ok(path) => format!("Report saved to {}", path.display()),
                            Err(err) => {
                                warn!(error = %err, "failed to save report");
                                "Could not save the report.".to_string()
                            }
                        };
                        report_status.set(Some(status));
                    },
                    "💾 Save Report"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_reset.call(()),
                    "🔄 New Consultation"
                }
            }
            if let Some(status) = report_status() {
                p { class: "report-status", "{status}" }
            }
        }
    }
}
