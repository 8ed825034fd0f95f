use std::sync::Arc;

use bimari_core::model::{BadgeId, PredictionResult, Progress};
use dioxus::prelude::*;
use services::ConsultationService;

use crate::context::AppContext;
use crate::views::{
    BadgesPanel, Loader, PredictionCard, StatsRow, SubmitState, SymptomInput, ViewError,
    ViewState, view_state_from_resource,
};
use crate::vm::{last_confidence_label, unlocked_announcement};

/// Signals behind the home page that a consultation updates.
#[derive(Clone, Copy, PartialEq)]
pub struct HomeState {
    pub prediction: Signal<Option<PredictionResult>>,
    pub submit_state: Signal<SubmitState>,
    pub latest_progress: Signal<Option<Progress>>,
    pub unlocked: Signal<Vec<BadgeId>>,
}

pub fn use_home_state() -> HomeState {
    HomeState {
        prediction: use_signal(|| None),
        submit_state: use_signal(SubmitState::default),
        latest_progress: use_signal(|| None),
        unlocked: use_signal(Vec::new),
    }
}

impl HomeState {
    /// Starts a consultation unless one is outstanding. The busy flag is raised
    /// before the task is spawned, so a second event in the same tick is dropped.
    pub fn submit(mut self, consultations: Arc<ConsultationService>, symptoms: String) {
        if self.submit_state.peek().is_busy() {
            return;
        }
        self.submit_state.set(SubmitState::Submitting);
        self.unlocked.set(Vec::new());

        spawn(async move {
            match consultations.submit(&symptoms).await {
                Ok(outcome) => {
                    self.prediction.set(Some(outcome.prediction));
                    self.latest_progress.set(Some(outcome.progress));
                    self.unlocked.set(outcome.unlocked);
                    self.submit_state.set(SubmitState::Idle);
                }
                Err(err) => {
                    if let Some(next) = SubmitState::after_error(&err) {
                        self.submit_state.set(next);
                    }
                }
            }
        });
    }

    fn reset(mut self) {
        self.prediction.set(None);
        self.unlocked.set(Vec::new());
        self.submit_state.set(SubmitState::Idle);
    }
}

#[component]
pub fn HomeView() -> Element {
    let state = use_home_state();
    rsx! { HomePage { state } }
}

#[component]
pub fn HomePage(state: HomeState) -> Element {
    let ctx = use_context::<AppContext>();
    let consultations = ctx.consultations();
    let health_facts = ctx.health_facts();

    let mut fact = use_signal({
        let health_facts = health_facts.clone();
        move || health_facts.random_fact()
    });

    let stored = use_resource({
        let consultations = consultations.clone();
        move || {
            let consultations = consultations.clone();
            async move { Ok::<_, ViewError>(consultations.load_progress().await) }
        }
    });

    // The outcome of the latest consultation wins over the initial load.
    let progress = match (state.latest_progress.cloned(), view_state_from_resource(&stored)) {
        (Some(progress), _) | (None, ViewState::Ready(progress)) => progress,
        _ => Progress::default(),
    };

    let submit_state = state.submit_state.cloned();
    let busy = submit_state.is_busy();
    let current_prediction = state.prediction.cloned();
    let announcement = unlocked_announcement(&state.unlocked.read());
    let last_confidence = last_confidence_label(current_prediction.as_ref());

    let on_submit = move |symptoms: String| state.submit(consultations.clone(), symptoms);

    let on_reset = move |()| {
        state.reset();
        fact.set(health_facts.random_fact());
    };

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "Welcome to " span { class: "brand-accent", "BIMARIBOT" } }
                p { class: "hero-subtitle",
                    "Describe how you feel and get an instant, AI-assisted assessment."
                }
                div { class: "health-fact", "💡 {fact}" }
            }

            if let Some(message) = announcement {
                div { class: "unlock-toast", "🏆 {message}" }
            }

            BadgesPanel { progress: progress.clone() }

            div { class: "home-grid",
                div { class: "input-column",
                    SymptomInput { busy, on_submit }
                    if let SubmitState::Failed(message) = submit_state {
                        div { class: "error-box",
                            p { "Error: {message}" }
                        }
                    }
                }
                div { class: "result-column",
                    if busy {
                        Loader {}
                    } else if let Some(result) = current_prediction {
                        PredictionCard { prediction: result, on_reset }
                    } else {
                        div { class: "empty-result card",
                            p { "🩺" }
                            p { class: "muted", "Your results will appear here." }
                        }
                    }
                }
            }

            StatsRow {
                consultations: progress.count.value(),
                badges: progress.badges.len(),
                last_confidence,
            }
        }
    }
}
