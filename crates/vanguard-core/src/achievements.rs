//! The fixed achievement roster. Unlocks are one-way latches that live for
//! the process session; restarting a run does not relock them.

use serde::{Deserialize, Serialize};

/// Identifier for each of the five achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstBlood,
    Survivor,
    PowerHungry,
    AcePilot,
    Unscathed,
}

/// An achievement record as shown to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    /// Icon tag for the presentation layer.
    pub icon: String,
}

impl Achievement {
    fn new(id: AchievementId, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            unlocked: false,
            icon: icon.to_owned(),
        }
    }
}

/// The initial locked roster, created once per session.
pub fn roster() -> Vec<Achievement> {
    vec![
        Achievement::new(
            AchievementId::FirstBlood,
            "First Blood",
            "Destroy your first enemy craft",
            "target",
        ),
        Achievement::new(
            AchievementId::Survivor,
            "Survivor",
            "Survive for over 60 seconds in a single run",
            "shield",
        ),
        Achievement::new(
            AchievementId::PowerHungry,
            "Power Hungry",
            "Collect 5 power-ups",
            "zap",
        ),
        Achievement::new(
            AchievementId::AcePilot,
            "Ace Pilot",
            "Reach level 5",
            "award",
        ),
        Achievement::new(
            AchievementId::Unscathed,
            "Unscathed",
            "Destroy 20 enemies without losing any health",
            "heart",
        ),
    ]
}
