use std::sync::Arc;

use bimari_core::model::{BadgeId, BadgeSet, ConsultationCount, Progress};
use services::report_service::DISCLAIMER;
use storage::KeyValueRepository;
use storage::repository::Storage;

use super::test_harness::{
    FailingPredictor, PendingPredictor, ViewKind, setup_view_harness,
    setup_view_harness_with_predictor, setup_view_harness_with_storage,
};
use crate::vm::LOADER_TIPS;

async fn seeded_storage(count: u64, badges: &[BadgeId]) -> Storage {
    let storage = Storage::in_memory();
    let progress = Progress::new(
        ConsultationCount::new(count),
        BadgeSet::from_ids(badges.iter().copied()),
    );
    storage.progress().save(&progress).await.expect("seed progress");
    storage
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_input_for_first_visit() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Describe Your Symptoms"), "missing input in {html}");
    assert!(html.contains("Get Diagnosis"), "missing submit in {html}");
    assert!(html.contains("health-fact"), "missing fact in {html}");
    assert!(html.contains("0/500"), "missing counter in {html}");
    assert!(html.contains("Last Confidence"), "missing stats in {html}");
    assert!(!html.contains("Your Health Badges"), "panel shown on first visit: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stored_badges_and_milestones() {
    let storage =
        seeded_storage(5, &[BadgeId::FirstConsultation, BadgeId::HealthSeeker]).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Your Health Badges"), "missing panel in {html}");
    assert!(html.contains("2 earned"), "missing earned count in {html}");
    assert!(html.contains("First Steps"), "missing badge in {html}");
    assert!(html.contains("Health Seeker"), "missing badge in {html}");
    assert!(html.contains("5/25"), "missing milestone in {html}");
    assert!(html.contains("Health Master"), "missing milestone title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn badges_view_smoke_lists_locked_and_unlocked() {
    let storage = seeded_storage(1, &[BadgeId::FirstConsultation]).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Badges, storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Badge Collection"), "missing title in {html}");
    assert!(
        html.contains("1 of 4 unlocked after 1 consultations"),
        "missing summary in {html}"
    );
    assert!(html.contains("Wellness Warrior"), "missing locked badge in {html}");
    assert!(html.contains("🔒"), "missing lock icon in {html}");
    assert!(html.contains("Epic"), "missing rarity in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn views_tolerate_corrupt_stored_progress() {
    let storage = Storage::in_memory();
    storage
        .entries
        .set(storage::CONSULTATIONS_KEY, "not a number")
        .await
        .expect("write corrupt count");
    let mut harness = setup_view_harness_with_storage(ViewKind::Badges, storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("0 of 4 unlocked after 0 consultations"),
        "missing defaulted summary in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn prediction_card_renders_confidence_alternatives_and_actions() {
    let mut harness = setup_view_harness(ViewKind::Prediction);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Influenza"), "missing disease in {html}");
    assert!(html.contains("87%"), "missing percent in {html}");
    assert!(html.contains("High Confidence"), "missing level in {html}");
    assert!(html.contains("Other possibilities (2 more)"), "missing toggle in {html}");
    assert!(!html.contains("Common Cold"), "alternatives expanded by default: {html}");
    assert!(html.contains("Drink fluids"), "missing precaution in {html}");
    assert!(html.contains("Save Report"), "missing save in {html}");
    assert!(html.contains("New Consultation"), "missing reset in {html}");
    let disclaimer_head = &DISCLAIMER[..40];
    assert!(html.contains(disclaimer_head), "missing disclaimer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn loader_renders_first_tip_and_heartbeat() {
    let mut harness = setup_view_harness(ViewKind::Loader);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains(LOADER_TIPS[0]), "missing tip in {html}");
    assert!(html.contains("beat active"), "missing heartbeat in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_submission_shows_card_and_first_badge() {
    let mut harness = setup_view_harness(ViewKind::HomeSubmitted {
        symptoms: "fever",
        submits: 1,
    });
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("Diagnosis for fever"), "missing card in {html}");
    assert!(html.contains("50%"), "missing percent in {html}");
    assert!(
        html.contains("New badge unlocked: 🎯 First Steps"),
        "missing announcement in {html}"
    );
    assert!(!html.contains("error-box"), "unexpected error in {html}");

    let stored = harness.storage.progress().load().await;
    assert_eq!(stored.count, ConsultationCount::new(1));
}

#[tokio::test(flavor = "current_thread")]
async fn home_submission_failure_shows_error_box() {
    let view = ViewKind::HomeSubmitted {
        symptoms: "fever",
        submits: 1,
    };
    let mut harness =
        setup_view_harness_with_predictor(view, Storage::in_memory(), Arc::new(FailingPredictor));
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("Error: Failed to get prediction"), "missing error in {html}");
    assert!(!html.contains("loader-tip"), "loader still shown: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_submit_in_same_tick_keeps_loader_up() {
    let view = ViewKind::HomeSubmitted {
        symptoms: "fever",
        submits: 2,
    };
    let mut harness =
        setup_view_harness_with_predictor(view, Storage::in_memory(), Arc::new(PendingPredictor));
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("loader-tip"), "loader dropped: {html}");
    assert!(!html.contains("error-box"), "busy rejection surfaced: {html}");
    assert!(!html.contains("Still analyzing"), "busy rejection surfaced: {html}");
}
