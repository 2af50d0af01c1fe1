//! Simulation constants and tuning parameters.
//!
//! Speeds are in pixels per second; durations in milliseconds. The numbers
//! reproduce the feel of a 60 fps per-frame integration (1 px/frame =
//! 60 px/s) while staying frame-rate independent.

// --- Play area ---

/// Play area width in pixels.
pub const PLAY_AREA_WIDTH: f64 = 800.0;

/// Play area height in pixels.
pub const PLAY_AREA_HEIGHT: f64 = 900.0;

// --- Clock ---

/// Upper bound on a single frame delta (ms). Protects against huge steps
/// after the host tab is backgrounded and resumed.
pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

// --- Player ---

/// Player craft side length (square).
pub const PLAYER_SIZE: f64 = 40.0;

/// Player movement speed (px/s).
pub const PLAYER_SPEED: f64 = 360.0;

/// Player starting and maximum health.
pub const PLAYER_MAX_HEALTH: u32 = 3;

/// Minimum time between player volleys (ms).
pub const FIRE_COOLDOWN_MS: f64 = 200.0;

/// Invulnerability window granted after taking a hit (ms).
pub const INVULNERABILITY_MS: f64 = 2000.0;

/// Triple-shot power-up duration (ms). Reacquisition restarts this.
pub const TRIPLE_SHOT_MS: f64 = 10_000.0;

/// Pointer-follow speed multiplier over keyboard speed.
pub const POINTER_SPEED_FACTOR: f64 = 1.5;

/// Pointer-follow dead zone radius (px).
pub const POINTER_DEADZONE: f64 = 5.0;

/// Margin outside the play area within which pointer input is still
/// accepted (px).
pub const POINTER_OVERSCAN: f64 = 50.0;

// --- Bullets ---

/// Player bullet speed (px/s, straight up).
pub const BULLET_SPEED: f64 = 480.0;

/// Lateral spread speed of the outer triple-shot bullets (px/s).
pub const TRIPLE_SPREAD_SPEED: f64 = 120.0;

/// Enemy bullet speed (px/s, straight down).
pub const ENEMY_BULLET_SPEED: f64 = 240.0;

/// Bullet radius (px).
pub const BULLET_RADIUS: f64 = 4.0;

/// Damage per bullet.
pub const BULLET_DAMAGE: u32 = 1;

/// Bullets beyond this margin outside the play area are removed (px).
pub const BULLET_CULL_MARGIN: f64 = 20.0;

/// Player bullet color.
pub const BULLET_COLOR_PLAYER: &str = "#ffffff";

/// Triple-shot bullet color.
pub const BULLET_COLOR_TRIPLE: &str = "#00ffff";

/// Enemy bullet color.
pub const BULLET_COLOR_ENEMY: &str = "#ff4444";

// --- Enemies ---

/// Enemy craft side length (square).
pub const ENEMY_SIZE: f64 = 40.0;

/// Base interval between enemy spawns at level 0 (ms).
pub const ENEMY_SPAWN_BASE_MS: f64 = 1500.0;

/// Per-level divisor factor: interval = base / (1 + level * factor).
pub const SPAWN_RATE_LEVEL_FACTOR: f64 = 0.1;

/// Spawn y coordinate, above the visible area.
pub const SPAWN_Y: f64 = -50.0;

/// Type roll threshold above which a HEAVY spawns.
pub const HEAVY_SPAWN_THRESHOLD: f64 = 0.85;

/// Type roll threshold above which a FAST spawns (below HEAVY's).
pub const FAST_SPAWN_THRESHOLD: f64 = 0.65;

/// Base enemy fire interval (ms), shortened by level.
pub const ENEMY_SHOOT_BASE_MS: f64 = 2000.0;

/// Fire interval reduction per level (ms).
pub const ENEMY_SHOOT_LEVEL_STEP_MS: f64 = 100.0;

/// Floor on the enemy fire interval (ms).
pub const ENEMY_SHOOT_MIN_MS: f64 = 400.0;

// --- Power-ups ---

/// Power-up side length (square).
pub const POWER_UP_SIZE: f64 = 30.0;

/// Power-up fall speed (px/s).
pub const POWER_UP_SPEED: f64 = 120.0;

/// Fixed interval between power-up spawns (ms).
pub const POWER_UP_SPAWN_MS: f64 = 10_000.0;

// --- Particles ---

/// Particles per enemy explosion.
pub const EXPLOSION_PARTICLES: u32 = 15;

/// Particles per player hit / shield break.
pub const PLAYER_HIT_PARTICLES: u32 = 20;

/// Maximum particle scatter speed per axis (px/s, +/-).
pub const PARTICLE_SCATTER_SPEED: f64 = 300.0;

/// Particle radius range (px).
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_MAX: f64 = 4.0;

/// Particle lifetime (ms). Life decays linearly from 1.0 to 0 over this.
pub const PARTICLE_LIFE_MS: f64 = 1000.0;

/// Shield-break burst color.
pub const SHIELD_BURST_COLOR: &str = "#00ffff";

/// Hull-hit burst color.
pub const HULL_BURST_COLOR: &str = "#ffffff";

// --- Scoring & progression ---

/// Score penalty when an enemy escapes past the bottom edge.
pub const ESCAPE_PENALTY: u32 = 50;

/// Cumulative kills per level-up (each level-up clears the wave).
pub const KILLS_PER_LEVEL: u32 = 15;

/// Survival time for the "survivor" achievement (ms).
pub const SURVIVOR_MS: f64 = 60_000.0;

/// Level that unlocks "ace_pilot".
pub const ACE_PILOT_LEVEL: u32 = 5;

/// Kill count for "unscathed" (must be at full health at that instant).
pub const UNSCATHED_KILLS: u32 = 20;

/// Power-ups collected for "power_hungry".
pub const POWER_HUNGRY_COUNT: u32 = 5;

// --- Notifications ---

/// Achievement toast display window (ms).
pub const TOAST_DURATION_MS: f64 = 3000.0;

/// Level-up banner display window (ms).
pub const LEVEL_UP_BANNER_MS: f64 = 2000.0;

/// Escape warning display window (ms).
pub const ESCAPE_WARNING_MS: f64 = 1000.0;
