//! Simulation engine: owns the world, the clock, and the frame loop.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands at frame
//! boundaries, runs all systems in a fixed order, and produces
//! `GameSnapshot`s. Completely headless (no rendering, audio, or input
//! framework), enabling deterministic testing: the same seed and the same
//! sequence of frame timestamps and commands reproduce a run exactly.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::components::Ship;
use vanguard_core::constants::{PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH, POINTER_OVERSCAN};
use vanguard_core::enums::GameState;
use vanguard_core::events::{AudioEvent, GameEvent};
use vanguard_core::state::GameSnapshot;
use vanguard_core::types::{Position, SimClock, SimTime};

use crate::progress::Progress;
use crate::systems;
use crate::systems::spawner::SpawnTimers;
use crate::world_setup;

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn/particle rolls.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Normalized per-frame input intent, pre-processed by the host's input
/// layer and applied via commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Movement direction, each component in [-1, 1].
    pub move_dx: f64,
    pub move_dy: f64,
    /// Whether the fire control is held.
    pub firing: bool,
    /// Pointer steering target in play-area coordinates, if active.
    pub pointer: Option<Position>,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    clock: SimClock,
    state: GameState,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    spawn_timers: SpawnTimers,
    progress: Progress,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
    player: Option<hecs::Entity>,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            clock: SimClock::default(),
            state: GameState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            spawn_timers: SpawnTimers::default(),
            progress: Progress::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
            player: None,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one host frame and return the resulting
    /// snapshot. `now_ms` is the host's frame timestamp; the clock bounds
    /// the derived delta. Outside the Playing state no time accumulates and
    /// no entity or timer advances.
    pub fn frame(&mut self, now_ms: f64) -> GameSnapshot {
        self.process_commands();

        if self.state == GameState::Playing {
            let delta_ms = self.clock.observe(now_ms);
            self.run_systems(delta_ms);
        } else {
            self.clock.sync(now_ms);
        }

        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            self.clock.time(),
            self.state,
            &self.progress,
            events,
            audio_events,
        )
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.clock.time()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.state, GameState::Start | GameState::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::TogglePause => match self.state {
                GameState::Playing => self.state = GameState::Paused,
                GameState::Paused => self.state = GameState::Playing,
                _ => {}
            },
            PlayerCommand::QuitToMenu => {
                if matches!(self.state, GameState::Paused | GameState::GameOver) {
                    self.world.clear();
                    self.player = None;
                    self.progress.notifications.clear();
                    self.state = GameState::Start;
                }
            }
            PlayerCommand::SetMovement { dx, dy } => {
                self.input.move_dx = dx.clamp(-1.0, 1.0);
                self.input.move_dy = dy.clamp(-1.0, 1.0);
            }
            PlayerCommand::SetFiring { firing } => {
                self.input.firing = firing;
            }
            PlayerCommand::SetPointer { x, y } => {
                self.input.pointer = Some(Position::new(
                    x.clamp(-POINTER_OVERSCAN, PLAY_AREA_WIDTH + POINTER_OVERSCAN),
                    y.clamp(-POINTER_OVERSCAN, PLAY_AREA_HEIGHT + POINTER_OVERSCAN),
                ));
            }
            PlayerCommand::ClearPointer => {
                self.input.pointer = None;
            }
        }
    }

    /// Reinitialize everything run-scoped: world, player, clock, spawn
    /// accumulators, stats. Session achievements persist.
    fn start_run(&mut self) {
        self.world = World::new();
        self.player = Some(world_setup::spawn_player(&mut self.world));
        self.clock = SimClock::default();
        self.spawn_timers = SpawnTimers::default();
        self.despawn_buffer.clear();
        self.events.clear();
        self.audio_events.clear();
        self.progress.reset_run(0.0);
        self.state = GameState::Playing;
    }

    /// Run all systems in order for one bounded time step.
    fn run_systems(&mut self, delta_ms: f64) {
        let now_ms = self.clock.elapsed_ms();

        // 1. Player movement, timers, fire control.
        systems::player_control::run(
            &mut self.world,
            &self.input,
            now_ms,
            delta_ms,
            &mut self.audio_events,
        );
        // 2. Enemy fire timers.
        systems::enemy_fire::run(&mut self.world, now_ms);
        // 3. Kinematic integration.
        systems::movement::run(&mut self.world, delta_ms);
        // 4. Particle decay.
        systems::particles::run(&mut self.world, delta_ms, &mut self.despawn_buffer);
        // 5. Scheduled spawns (accumulated simulated time).
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timers,
            self.progress.stats.level,
            now_ms,
            delta_ms,
        );
        // 6. Collision detection and resolution.
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.events,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 7. Bounds culling, escape events, compaction.
        systems::cleanup::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 8. Score/level/achievement tracking over this frame's events.
        let at_full_health = self.player_at_full_health();
        let frame_events = std::mem::take(&mut self.events);
        let mut derived = Vec::new();
        self.progress.apply(
            &mut self.world,
            &frame_events,
            at_full_health,
            now_ms,
            &mut derived,
        );
        self.progress.check_survival(now_ms, &mut derived);
        self.progress.prune_notifications(now_ms);
        self.events = frame_events;
        self.events.extend(derived);

        // 9. Terminal transition: depleted health ends the run.
        if self.player_health() == Some(0) {
            self.state = GameState::GameOver;
        }
    }

    fn player_health(&self) -> Option<u32> {
        let player = self.player?;
        self.world.get::<&Ship>(player).map(|s| s.health).ok()
    }

    fn player_at_full_health(&self) -> bool {
        let Some(player) = self.player else {
            return false;
        };
        self.world
            .get::<&Ship>(player)
            .map(|s| s.health == s.max_health)
            .unwrap_or(false)
    }

    // --- Test support ---

    /// Place the player craft at an exact position.
    #[cfg(test)]
    pub fn set_player_position(&mut self, x: f64, y: f64) {
        if let Some(player) = self.player {
            if let Ok(mut pos) = self.world.get::<&mut Position>(player) {
                pos.x = x;
                pos.y = y;
            }
        }
    }

    /// Mutable access to the player's Ship component.
    #[cfg(test)]
    pub fn with_player_ship(&mut self, f: impl FnOnce(&mut Ship)) {
        if let Some(player) = self.player {
            if let Ok(mut ship) = self.world.get::<&mut Ship>(player) {
                f(&mut ship);
            }
        }
    }

    /// Spawn an enemy of a given kind at an exact position.
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        kind: vanguard_core::enums::EnemyKind,
        x: f64,
        y: f64,
    ) -> hecs::Entity {
        let level = self.progress.stats.level;
        let now_ms = self.clock.elapsed_ms();
        world_setup::spawn_enemy_of_kind(&mut self.world, kind, level, x, y, now_ms)
    }

    /// Spawn a power-up of a given kind at an exact position.
    #[cfg(test)]
    pub fn spawn_power_up_at(
        &mut self,
        kind: vanguard_core::enums::PowerUpKind,
        x: f64,
        y: f64,
    ) -> hecs::Entity {
        world_setup::spawn_power_up_of_kind(&mut self.world, kind, x, y)
    }

    /// Spawn a bullet with the given owner at an exact position, moving the
    /// right way for its side.
    #[cfg(test)]
    pub fn spawn_bullet_at(
        &mut self,
        owner: vanguard_core::enums::BulletOwner,
        x: f64,
        y: f64,
    ) -> hecs::Entity {
        use vanguard_core::components::Bullet;
        use vanguard_core::constants::*;
        use vanguard_core::enums::BulletOwner;
        use vanguard_core::types::Velocity;

        let (color, vy) = match owner {
            BulletOwner::Player => (BULLET_COLOR_PLAYER, -BULLET_SPEED),
            BulletOwner::Enemy => (BULLET_COLOR_ENEMY, ENEMY_BULLET_SPEED),
        };
        self.world.spawn((
            Bullet {
                radius: BULLET_RADIUS,
                color: color.to_owned(),
                damage: BULLET_DAMAGE,
                owner,
            },
            Position::new(x, y),
            Velocity::new(0.0, vy),
        ))
    }
}
