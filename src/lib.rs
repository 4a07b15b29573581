//! Cat Catch - a countdown arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `renderer`: Render and HUD sinks (Canvas 2D on web, ASCII on native)
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Game mode and player preferences
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::{GameMode, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 250.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Pixels per frame
    pub const PLAYER_SPEED: f32 = 4.0;

    /// Cat sprite sizes
    pub const CAT_SIZE: f32 = 48.0;
    pub const FAT_CAT_SIZE: f32 = 64.0;

    /// Hitbox shrink applied to the cat side of every overlap test
    pub const HITBOX_PADDING: f32 = 10.0;

    /// Cats vanish after this long on screen
    pub const CAT_TTL_MS: f64 = 5000.0;

    /// Countdown cadence
    pub const COUNTDOWN_PERIOD_MS: f64 = 1000.0;
    /// Baseline spawn cadence
    pub const SPAWN_PERIOD_MS: f64 = 1000.0;

    /// Difficulty steps up whenever the countdown crosses a multiple of this
    pub const ESCALATION_EVERY_SECS: u32 = 10;

    /// Maximum spawner firings per frame to prevent spiral of death
    pub const MAX_SPAWNS_PER_FRAME: u32 = 64;
}
