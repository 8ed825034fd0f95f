use bimari_core::model::{BadgeId, MILESTONES, Milestone, Progress, Rarity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeCardVm {
    pub id: BadgeId,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub rarity_label: &'static str,
    pub rarity_class: &'static str,
    pub unlocked: bool,
}

impl BadgeCardVm {
    #[must_use]
    pub fn new(id: BadgeId, unlocked: bool) -> Self {
        let definition = id.definition();
        Self {
            id,
            icon: definition.icon,
            title: definition.title,
            description: definition.description,
            rarity_label: definition.rarity.label(),
            rarity_class: rarity_class(definition.rarity),
            unlocked,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneVm {
    pub icon: &'static str,
    pub title: &'static str,
    pub requirement_label: String,
    pub progress_label: String,
    pub percent: u8,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgesPanelVm {
    /// False before the first consultation; the panel is not rendered then.
    pub visible: bool,
    pub earned: Vec<BadgeCardVm>,
    pub earned_label: String,
    pub milestones: Vec<MilestoneVm>,
}

#[must_use]
pub fn map_badges_panel(progress: &Progress) -> BadgesPanelVm {
    let count = progress.count.value();
    let earned = progress
        .badges
        .iter()
        .map(|id| BadgeCardVm::new(id, true))
        .collect::<Vec<_>>();

    BadgesPanelVm {
        visible: !progress.is_fresh(),
        earned_label: format!("{} earned", earned.len()),
        earned,
        milestones: MILESTONES.iter().map(|m| map_milestone(m, count)).collect(),
    }
}

/// Every known badge in catalog order, flagged with whether it is unlocked.
#[must_use]
pub fn map_badge_catalog(progress: &Progress) -> Vec<BadgeCardVm> {
    BadgeId::ALL
        .iter()
        .map(|id| BadgeCardVm::new(*id, progress.badges.contains(*id)))
        .collect()
}

#[must_use]
pub fn unlocked_announcement(unlocked: &[BadgeId]) -> Option<String> {
    let titles = unlocked
        .iter()
        .map(|id| {
            let definition = id.definition();
            format!("{} {}", definition.icon, definition.title)
        })
        .collect::<Vec<_>>();
    match titles.len() {
        0 => None,
        1 => Some(format!("New badge unlocked: {}", titles[0])),
        _ => Some(format!("New badges unlocked: {}", titles.join(", "))),
    }
}

fn map_milestone(milestone: &Milestone, count: u64) -> MilestoneVm {
    MilestoneVm {
        icon: milestone.icon,
        title: milestone.title,
        requirement_label: format!("{} consultations", milestone.target),
        progress_label: format!("{}/{}", count.min(milestone.target), milestone.target),
        percent: milestone.percent(count),
        completed: milestone.is_completed(count),
    }
}

fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "rarity-common",
        Rarity::Uncommon => "rarity-uncommon",
        Rarity::Rare => "rarity-rare",
        Rarity::Epic => "rarity-epic",
    }
}
