// Frame pacing
pub const FRAMES_PER_SECOND: u32 = 30;

// Default screen geometry (world units)
pub const SCREEN_WIDTH: i32 = 1300;
pub const SCREEN_HEIGHT: i32 = 888;
pub const FLOOR_HEIGHT: i32 = 70;

// Player
pub const PLAYER_X: i32 = 100;
pub const PLAYER_SIZE: i32 = 95;
pub const CROUCH_HEIGHT_FACTOR: f64 = 0.55;
pub const CROUCH_MIN_HEIGHT: i32 = 20;
pub const JUMP_VELOCITY: f64 = -22.0;
pub const GRAVITY: f64 = 1.2;
pub const MAX_FALL_SPEED: f64 = 40.0;

// Obstacles
pub const OBSTACLE_SPAWN_INTERVAL_FRAMES: i64 = 35;
pub const CEILING_RUN_COOLDOWN_FRAMES: i64 = 25;
pub const CEILING_MAX_BLOCKS: u32 = 5;
pub const OBSTACLE_MIN_WIDTH: i32 = 70;
pub const OBSTACLE_MAX_WIDTH: i32 = 100;
pub const GROUND_MIN_HEIGHT: i32 = 90;
pub const GROUND_MAX_HEIGHT: i32 = 130;
pub const CEILING_GAP: i32 = 60;
pub const HITBOX_INSET: i32 = 8;

// Items
pub const ITEM_SIZE: i32 = 30;
pub const ITEM_SPAWN_COOLDOWN_FRAMES: i64 = 140;
pub const ITEM_BASE_CHANCE: f64 = 0.02;
pub const ITEM_CHANCE_PER_LEVEL: f64 = 0.02;
pub const ITEM_PLACEMENT_ATTEMPTS: u32 = 6;
pub const ITEM_LEAD_MIN: i32 = 20;
pub const ITEM_LEAD_MAX: i32 = 260;

// Difficulty
pub const INITIAL_SPEED: f64 = 15.0;
pub const LEVEL_SPEED_FACTOR: f64 = 1.25;
pub const DIFFICULTY_INTERVAL_MS: u64 = 12_000;

// Power-up timings
pub const REVEAL_DURATION_MS: u64 = 1_000;
pub const REVEAL_ANIMATION_STEP_MS: u64 = 100;
pub const REVEAL_ANIMATION_FRAMES: u8 = 5;
pub const DRAIN_STEPS: u8 = 3;
pub const DRAIN_STEP_MS: u64 = 1_000;
pub const INVULNERABLE_DURATION_MS: u64 = 10_000;
pub const SHIELD_BREAK_INVULNERABLE_MS: u64 = 2_000;
pub const BANNER_DURATION_MS: u64 = 1_000;
