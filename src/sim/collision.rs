//! Collision detection and capture scoring
//!
//! Boxes are axis-aligned. The cat's box is shrunk by a padding on all four
//! edges so grazing a sprite's transparent corner doesn't count. Touching
//! edges never count.

use glam::Vec2;

use super::state::{Cat, FloatingText, GameEvent, GameState};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `padding` on every edge
    pub fn shrink(&self, padding: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(padding),
            max: self.max - Vec2::splat(padding),
        }
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Does the player box overlap this cat's padded hitbox?
pub fn player_hits_cat(player: &Aabb, cat: &Cat, padding: f32) -> bool {
    let hitbox = Aabb::from_pos_size(cat.pos, cat.size).shrink(padding);
    player.overlaps(&hitbox)
}

/// Capture every cat the player overlaps this tick.
///
/// All overlapping cats score; each is removed so it can only score once.
/// Returns the net score change.
pub fn resolve_collisions(state: &mut GameState) -> i64 {
    let player_box = Aabb::from_pos_size(state.player.pos, state.player.size);
    let padding = state.tuning.hitbox_padding;

    let (caught, remaining): (Vec<Cat>, Vec<Cat>) = std::mem::take(&mut state.cats)
        .into_iter()
        .partition(|cat| player_hits_cat(&player_box, cat, padding));
    state.cats = remaining;

    let mut net = 0;
    for cat in caught {
        let delta = cat.kind.score_delta();
        state.score += delta;
        net += delta;

        if state.tuning.floating_text {
            state.floating_texts.push(FloatingText {
                label: cat.kind.label().to_string(),
                pos: cat.center(),
                color: cat.kind.color(),
                alpha: 1.0,
                drift: state.tuning.text_drift,
            });
        }

        log::debug!("Caught {:?} cat {} ({:+}), score {}", cat.kind, cat.id, delta, state.score);
        state.events.push(GameEvent::CatCaught {
            id: cat.id,
            kind: cat.kind,
            delta,
        });
    }

    net
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CAT_SIZE;
    use crate::settings::GameMode;
    use crate::sim::state::{CatKind, GamePhase};

    fn state(mode: GameMode) -> GameState {
        let mut state = GameState::new(1, mode, mode.tuning());
        state.phase = GamePhase::Running;
        state
    }

    fn push_cat(state: &mut GameState, kind: CatKind, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.cats.push(Cat {
            id,
            kind,
            pos: Vec2::new(x, y),
            size: kind.size(),
            vel: Vec2::ZERO,
            spawned_at_ms: 0.0,
        });
        id
    }

    #[test]
    fn test_strict_overlap() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::from_pos_size(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_capture_normal_cat() {
        let mut state = state(GameMode::Classic);
        state.score = 4;
        state.player.pos = Vec2::new(90.0, 90.0);
        push_cat(&mut state, CatKind::Normal, 100.0, 100.0);
        assert_eq!(state.cats[0].size, Vec2::splat(CAT_SIZE));

        let net = resolve_collisions(&mut state);

        assert_eq!(net, 1);
        assert_eq!(state.score, 5);
        assert!(state.cats.is_empty());
    }

    #[test]
    fn test_padding_is_cat_side_only() {
        let mut state = state(GameMode::Classic);
        // Player right edge at 105; cat hitbox starts at 100 + 10
        state.player.pos = Vec2::new(55.0, 100.0);
        push_cat(&mut state, CatKind::Normal, 100.0, 100.0);
        assert_eq!(resolve_collisions(&mut state), 0);
        assert_eq!(state.cats.len(), 1);

        // Exactly touching the padded edge still misses
        state.player.pos.x = 60.0;
        assert_eq!(resolve_collisions(&mut state), 0);

        state.player.pos.x = 60.5;
        assert_eq!(resolve_collisions(&mut state), 1);
    }

    #[test]
    fn test_multiple_captures_in_one_tick() {
        let mut state = state(GameMode::Arcade);
        state.player.pos = Vec2::new(100.0, 100.0);
        push_cat(&mut state, CatKind::Normal, 90.0, 90.0);
        push_cat(&mut state, CatKind::Bad, 110.0, 95.0);
        push_cat(&mut state, CatKind::Fat, 80.0, 110.0);
        let far = push_cat(&mut state, CatKind::Normal, 600.0, 400.0);

        let net = resolve_collisions(&mut state);

        assert_eq!(net, 1 - 1 + 2);
        assert_eq!(state.score, 2);
        assert_eq!(state.cats.len(), 1);
        assert_eq!(state.cats[0].id, far);
        assert_eq!(state.floating_texts.len(), 3);
    }

    #[test]
    fn test_cat_scores_once() {
        let mut state = state(GameMode::Classic);
        state.player.pos = Vec2::new(100.0, 100.0);
        push_cat(&mut state, CatKind::Bad, 100.0, 100.0);

        resolve_collisions(&mut state);
        resolve_collisions(&mut state);

        assert_eq!(state.score, -1);
    }

    #[test]
    fn test_floating_text_matches_kind() {
        let mut state = state(GameMode::Arcade);
        state.player.pos = Vec2::new(100.0, 100.0);
        push_cat(&mut state, CatKind::Fat, 100.0, 100.0);
        resolve_collisions(&mut state);

        let text = &state.floating_texts[0];
        assert_eq!(text.label, "+2");
        assert_eq!(text.color, CatKind::Fat.color());
        assert_eq!(text.alpha, 1.0);
        assert_eq!(text.pos, Vec2::new(132.0, 132.0));
    }

    #[test]
    fn test_classic_has_no_floating_text() {
        let mut state = state(GameMode::Classic);
        state.player.pos = Vec2::new(100.0, 100.0);
        push_cat(&mut state, CatKind::Normal, 100.0, 100.0);
        resolve_collisions(&mut state);
        assert!(state.floating_texts.is_empty());
    }
}
