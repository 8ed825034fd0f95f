use bimari_core::model::append_quick_symptom;
use dioxus::prelude::*;

use crate::vm::{
    MAX_SYMPTOM_CHARS, PLACEHOLDER_TEXTS, QUICK_SYMPTOMS, TYPING_INDICATOR, Typewriter,
    can_submit, char_counter,
};

#[component]
pub fn SymptomInput(busy: bool, on_submit: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);
    let placeholder = use_signal(String::new);
    let mut typing = use_signal(|| false);
    let mut typing_generation = use_signal(|| 0_u64);

    use_future(move || async move {
        let mut placeholder = placeholder;
        let mut writer = Typewriter::new(&PLACEHOLDER_TEXTS);
        loop {
            let delay = writer.tick();
            placeholder.set(writer.text());
            tokio::time::sleep(delay).await;
        }
    });

    let current = text();
    let counter = char_counter(&current);
    let submit_enabled = can_submit(&current, busy);
    let max_chars = MAX_SYMPTOM_CHARS.to_string();

    rsx! {
        section { class: "symptom-input card",
            h2 { "Describe Your Symptoms" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let value = text();
                    if can_submit(&value, busy) {
                        on_submit.call(value.trim().to_string());
                    }
                },
                div { class: "textarea-wrap",
                    textarea {
                        class: "symptom-textarea",
                        rows: "5",
                        maxlength: "{max_chars}",
                        disabled: busy,
                        placeholder: "{placeholder}",
                        value: "{current}",
                        oninput: move |evt| {
                            text.set(evt.value());
                            typing.set(true);
                            let generation = typing_generation() + 1;
                            typing_generation.set(generation);
                            spawn(async move {
                                let mut typing = typing;
                                tokio::time::sleep(TYPING_INDICATOR).await;
                                // A newer keystroke owns the indicator now.
                                if typing_generation() == generation {
                                    typing.set(false);
                                }
                            });
                        },
                    }
                    div { class: "textarea-meta",
                        if typing() {
                            span { class: "typing-indicator", "Processing..." }
                        }
                        span { class: "char-counter", "{counter}" }
                    }
                }

                div { class: "quick-symptoms",
                    span { class: "quick-label", "Quick add:" }
                    for quick in QUICK_SYMPTOMS {
                        button {
                            key: "{quick.name}",
                            class: "quick-chip",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| {
                                let next = append_quick_symptom(&text(), quick.name);
                                text.set(next);
                            },
                            "{quick.icon} {quick.name}"
                        }
                    }
                }

                button {
                    class: "btn btn-primary submit",
                    r#type: "submit",
                    disabled: !submit_enabled,
                    if busy { "Analyzing..." } else { "Get Diagnosis" }
                }
            }
        }
    }
}
