//! Score, level, and achievement tracking.
//!
//! Consumes the discrete gameplay events emitted during a frame rather than
//! polling entity state. Achievement unlocks are one-way latches that
//! survive run restarts; stats reset with each run. Transient UI
//! notifications are queued with absolute expiry times in simulated
//! milliseconds and pruned each frame.

use hecs::{Entity, World};

use vanguard_core::achievements::{roster, Achievement, AchievementId};
use vanguard_core::components::Enemy;
use vanguard_core::constants::*;
use vanguard_core::events::{GameEvent, Notification, NotificationKind};
use vanguard_core::state::GameStats;

/// Session-lifetime progression state.
#[derive(Debug, Clone)]
pub struct Progress {
    pub stats: GameStats,
    pub achievements: Vec<Achievement>,
    pub notifications: Vec<Notification>,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            stats: GameStats::default(),
            achievements: roster(),
            notifications: Vec::new(),
        }
    }

    /// Begin a fresh run at the given simulated time. Achievements persist
    /// for the session; everything else resets.
    pub fn reset_run(&mut self, start_ms: f64) {
        self.stats = GameStats {
            start_ms,
            ..GameStats::default()
        };
        self.notifications.clear();
    }

    /// Fold this frame's gameplay events into score/level/achievement
    /// state. Derived events (level-ups, unlocks) are appended to
    /// `derived`, never re-consumed.
    ///
    /// `player_at_full_health` is sampled after collision resolution; the
    /// "unscathed" check only fires at the instant the 20th kill lands.
    pub fn apply(
        &mut self,
        world: &mut World,
        events: &[GameEvent],
        player_at_full_health: bool,
        now_ms: f64,
        derived: &mut Vec<GameEvent>,
    ) {
        for event in events {
            match event {
                GameEvent::EnemyKilled { score_value } => {
                    self.stats.score += score_value;
                    self.stats.enemies_killed += 1;

                    if self.stats.enemies_killed == 1 {
                        self.unlock(AchievementId::FirstBlood, now_ms, derived);
                    }
                    if self.stats.enemies_killed == UNSCATHED_KILLS && player_at_full_health {
                        self.unlock(AchievementId::Unscathed, now_ms, derived);
                    }
                    if self.stats.enemies_killed % KILLS_PER_LEVEL == 0 {
                        self.level_up(world, now_ms, derived);
                    }
                }
                GameEvent::EnemyEscaped { penalty } => {
                    self.stats.enemies_escaped += 1;
                    self.stats.score = self.stats.score.saturating_sub(*penalty);
                    self.notifications.push(Notification {
                        kind: NotificationKind::EnemyEscaped { penalty: *penalty },
                        expires_at_ms: now_ms + ESCAPE_WARNING_MS,
                    });
                }
                GameEvent::PowerUpCollected { .. } => {
                    self.stats.power_ups_collected += 1;
                    if self.stats.power_ups_collected == POWER_HUNGRY_COUNT {
                        self.unlock(AchievementId::PowerHungry, now_ms, derived);
                    }
                }
                // Derived-only events; never fed back in.
                GameEvent::LevelUp { .. } | GameEvent::AchievementUnlocked { .. } => {}
            }
        }
    }

    /// Continuous survival check: unlock is an idempotent latch, so calling
    /// this every frame is fine.
    pub fn check_survival(&mut self, now_ms: f64, derived: &mut Vec<GameEvent>) {
        if now_ms - self.stats.start_ms > SURVIVOR_MS {
            self.unlock(AchievementId::Survivor, now_ms, derived);
        }
    }

    /// Drop notifications whose display window has passed.
    pub fn prune_notifications(&mut self, now_ms: f64) {
        self.notifications.retain(|n| n.expires_at_ms > now_ms);
    }

    /// Increment the level and clear the live wave.
    fn level_up(&mut self, world: &mut World, now_ms: f64, derived: &mut Vec<GameEvent>) {
        self.stats.level += 1;
        clear_wave(world);
        derived.push(GameEvent::LevelUp {
            level: self.stats.level,
        });
        self.notifications.push(Notification {
            kind: NotificationKind::LevelUp {
                level: self.stats.level,
            },
            expires_at_ms: now_ms + LEVEL_UP_BANNER_MS,
        });
        if self.stats.level == ACE_PILOT_LEVEL {
            self.unlock(AchievementId::AcePilot, now_ms, derived);
        }
    }

    /// Latch an achievement. Re-triggering after unlock is a no-op; exactly
    /// one unlock event and one toast are ever emitted per achievement.
    fn unlock(&mut self, id: AchievementId, now_ms: f64, derived: &mut Vec<GameEvent>) {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) else {
            return;
        };
        if achievement.unlocked {
            return;
        }
        achievement.unlocked = true;
        derived.push(GameEvent::AchievementUnlocked { id });
        self.notifications.push(Notification {
            kind: NotificationKind::AchievementUnlocked { id },
            expires_at_ms: now_ms + TOAST_DURATION_MS,
        });
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// Despawn every live enemy (the level-up screen clear).
fn clear_wave(world: &mut World) {
    let doomed: Vec<Entity> = {
        let mut query = world.query::<&Enemy>();
        query.iter().map(|(entity, _)| entity).collect()
    };
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
