use bimari_core::model::{BadgeId, Progress};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BadgeCardVm, MilestoneVm, map_badge_catalog, map_badges_panel};

/// Earned badges and milestone progress on the home page.
#[component]
pub fn BadgesPanel(progress: Progress) -> Element {
    let mut selected = use_signal(|| None::<BadgeId>);
    let vm = map_badges_panel(&progress);

    if !vm.visible {
        return rsx! {};
    }

    rsx! {
        section { class: "badges-panel card",
            div { class: "panel-header",
                h2 { "🏅 Your Health Badges" }
                span { class: "badge-count", "{vm.earned_label}" }
            }
            if vm.earned.is_empty() {
                p { class: "muted", "Keep consulting to earn your first badge." }
            } else {
                div { class: "badge-grid",
                    for card in vm.earned {
                        button {
                            key: "{card.id}",
                            class: "badge-tile {card.rarity_class}",
                            r#type: "button",
                            onclick: move |_| selected.set(Some(card.id)),
                            span { class: "badge-icon", "{card.icon}" }
                            span { class: "badge-title", "{card.title}" }
                        }
                    }
                }
            }
            h3 { "Upcoming Milestones" }
            div { class: "milestones",
                for milestone in vm.milestones {
                    MilestoneRow { key: "{milestone.title}", milestone }
                }
            }
            if let Some(id) = selected() {
                BadgeDetail {
                    card: BadgeCardVm::new(id, true),
                    on_close: move |()| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn MilestoneRow(milestone: MilestoneVm) -> Element {
    let state = if milestone.completed { "milestone completed" } else { "milestone" };
    rsx! {
        div { class: "{state}",
            span { class: "milestone-icon", "{milestone.icon}" }
            div { class: "milestone-body",
                div { class: "milestone-row",
                    span { class: "milestone-title", "{milestone.title}" }
                    span { class: "milestone-progress", "{milestone.progress_label}" }
                }
                div { class: "bar",
                    div { class: "bar-fill", style: "width: {milestone.percent}%" }
                }
                span { class: "muted", "{milestone.requirement_label}" }
            }
        }
    }
}

/// Modal with the full description of one badge.
#[component]
pub fn BadgeDetail(card: BadgeCardVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal badge-detail {card.rarity_class}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "badge-detail-icon", "{card.icon}" }
                h2 { "{card.title}" }
                span { class: "rarity-pill", "{card.rarity_label}" }
                p { "{card.description}" }
                if !card.unlocked {
                    p { class: "muted", "🔒 Not unlocked yet" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct BadgesData {
    progress: Progress,
    cards: Vec<BadgeCardVm>,
}

/// Full catalog page with locked and unlocked badges.
#[component]
pub fn BadgesView() -> Element {
    let ctx = use_context::<AppContext>();
    let consultations = ctx.consultations();
    let mut selected = use_signal(|| None::<BadgeCardVm>);

    let resource = use_resource(move || {
        let consultations = consultations.clone();
        async move {
            let progress = consultations.load_progress().await;
            let cards = map_badge_catalog(&progress);
            Ok::<_, ViewError>(BadgesData { progress, cards })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page badges-page",
            h2 { "Badge Collection" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "muted",
                        "{data.progress.badges.len()} of {data.cards.len()} unlocked after {data.progress.count} consultations"
                    }
                    div { class: "badge-grid catalog",
                        for card in data.cards {
                            button {
                                key: "{card.id}",
                                class: if card.unlocked { "badge-tile {card.rarity_class}" } else { "badge-tile locked" },
                                r#type: "button",
                                onclick: {
                                    let card = card.clone();
                                    move |_| selected.set(Some(card.clone()))
                                },
                                span { class: "badge-icon", if card.unlocked { "{card.icon}" } else { "🔒" } }
                                span { class: "badge-title", "{card.title}" }
                                span { class: "rarity-pill", "{card.rarity_label}" }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            if let Some(card) = selected() {
                BadgeDetail { card, on_close: move |()| selected.set(None) }
            }
        }
    }
}
