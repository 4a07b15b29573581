//! Player movement and cat physics

use glam::Vec2;

use super::input::HeldKeys;
use super::state::{Cat, GameState, Player};
use crate::consts::*;

/// Canvas extent
pub fn canvas_size() -> Vec2 {
    Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Move the player by `speed` per held key, then keep the box on the canvas.
///
/// Axes are independent: diagonals add up, opposing keys cancel.
pub fn update_player(player: &mut Player, keys: &HeldKeys) {
    let (dx, dy) = keys.axis();
    player.pos += Vec2::new(dx, dy) * player.speed;
    clamp_player(player);
}

/// Saturating clamp into `[0, canvas - size]`
pub fn clamp_player(player: &mut Player) {
    let max = (canvas_size() - player.size).max(Vec2::ZERO);
    player.pos = player.pos.clamp(Vec2::ZERO, max);
}

/// Advance one cat and reflect off the canvas edges, per axis
pub fn update_cat(cat: &mut Cat) {
    if cat.vel == Vec2::ZERO {
        return;
    }

    cat.pos += cat.vel;
    let max = (canvas_size() - cat.size).max(Vec2::ZERO);

    if cat.pos.x <= 0.0 || cat.pos.x >= max.x {
        cat.vel.x = -cat.vel.x;
    }
    if cat.pos.y <= 0.0 || cat.pos.y >= max.y {
        cat.vel.y = -cat.vel.y;
    }
    cat.pos = cat.pos.clamp(Vec2::ZERO, max);
}

/// Move every cat
pub fn update_cats(state: &mut GameState) {
    for cat in &mut state.cats {
        update_cat(cat);
    }
}
