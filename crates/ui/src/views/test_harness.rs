use std::sync::Arc;

use async_trait::async_trait;
use bimari_core::model::{PredictionResult, RankedPrediction, ServiceSettings, Symptoms};
use bimari_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, PredictionError, Predictor};
use storage::repository::Storage;

use super::home::{HomePage, use_home_state};
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{BadgesView, HomeView, Loader, PredictionCard, Theme};

struct StubPredictor;

#[async_trait]
impl Predictor for StubPredictor {
    async fn predict(&self, symptoms: &Symptoms) -> Result<PredictionResult, PredictionError> {
        Ok(PredictionResult {
            disease: format!("Diagnosis for {}", symptoms.as_str()),
            confidence: 0.5,
            top_predictions: Vec::new(),
            precautions: Vec::new(),
        })
    }
}

/// Always times out.
pub struct FailingPredictor;

#[async_trait]
impl Predictor for FailingPredictor {
    async fn predict(&self, _symptoms: &Symptoms) -> Result<PredictionResult, PredictionError> {
        Err(PredictionError::Timeout)
    }
}

/// Never answers, so a consultation stays in flight for the whole test.
pub struct PendingPredictor;

#[async_trait]
impl Predictor for PendingPredictor {
    async fn predict(&self, _symptoms: &Symptoms) -> Result<PredictionResult, PredictionError> {
        std::future::pending().await
    }
}

pub fn sample_prediction() -> PredictionResult {
    PredictionResult {
        disease: "Influenza".into(),
        confidence: 0.874,
        top_predictions: vec![
            RankedPrediction { label: "Influenza".into(), score: 0.874 },
            RankedPrediction { label: "Common Cold".into(), score: 0.08 },
            RankedPrediction { label: "Bronchitis".into(), score: 0.03 },
        ],
        precautions: vec!["Rest".into(), "Drink fluids".into()],
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Badges,
    Prediction,
    Loader,
    /// Home page after `submits` submit events in the same tick.
    HomeSubmitted {
        symptoms: &'static str,
        submits: usize,
    },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| Signal::new(Theme::default()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Badges => rsx! { BadgesView {} },
        ViewKind::Prediction => rsx! {
            PredictionCard { prediction: sample_prediction(), on_reset: move |()| {} }
        },
        ViewKind::Loader => rsx! { Loader {} },
        ViewKind::HomeSubmitted { symptoms, submits } => rsx! {
            SubmittedHome { symptoms, submits }
        },
    }
}

#[component]
fn SubmittedHome(symptoms: &'static str, submits: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_home_state();
    use_effect(move || {
        for _ in 0..submits {
            state.submit(ctx.consultations(), symptoms.to_string());
        }
    });
    rsx! { HomePage { state } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Builds the view over fresh in-memory storage.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory())
}

/// Builds the view over `storage`, so a test can seed progress first.
pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    setup_view_harness_with_predictor(view, storage, Arc::new(StubPredictor))
}

pub fn setup_view_harness_with_predictor(
    view: ViewKind,
    storage: Storage,
    predictor: Arc<dyn Predictor>,
) -> ViewHarness {
    let app = Arc::new(AppServices::from_parts(
        &storage,
        predictor,
        fixed_clock(),
        &ServiceSettings::default(),
    ));

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
