//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock time is passed in, never read
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod lifetime;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Cadence, Schedule, Task};
pub use collision::{Aabb, resolve_collisions};
pub use input::{Direction, HeldKeys, KeySampler, KeySource};
pub use state::{
    Cat, CatKind, Difficulty, FloatingText, GameEvent, GamePhase, GameState, Notice, Player, Rgb,
};
pub use tick::{TickInput, frame, restart, start, tick};
