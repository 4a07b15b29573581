//! Cat spawning

use glam::Vec2;
use rand::Rng;

use super::state::{Cat, CatKind, GameEvent, GameState};
use crate::consts::*;

/// Pick a category: fat first, then bad, else normal
pub fn roll_kind<R: Rng>(rng: &mut R, fat_chance: f32, bad_chance: f32) -> CatKind {
    if rng.random::<f32>() < fat_chance {
        CatKind::Fat
    } else if rng.random::<f32>() < bad_chance {
        CatKind::Bad
    } else {
        CatKind::Normal
    }
}

/// Random sign times a magnitude in `[lo, hi]`
fn random_axis_speed<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    let magnitude = rng.random_range(lo..=hi);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Spawn one cat somewhere fully inside the canvas. No-op unless running.
pub fn spawn_cat(state: &mut GameState, now_ms: f64) {
    if !state.is_running() {
        return;
    }

    let kind = roll_kind(
        &mut state.rng,
        state.tuning.fat_chance,
        state.difficulty.bad_chance,
    );
    let size = kind.size();
    let max_x = (CANVAS_WIDTH - size.x).max(0.0);
    let max_y = (CANVAS_HEIGHT - size.y).max(0.0);
    let pos = Vec2::new(
        state.rng.random_range(0.0..=max_x),
        state.rng.random_range(0.0..=max_y),
    );

    let vel = match state.tuning.cat_speed {
        Some((lo, hi)) => Vec2::new(
            random_axis_speed(&mut state.rng, lo, hi),
            random_axis_speed(&mut state.rng, lo, hi),
        ),
        None => Vec2::ZERO,
    };

    let id = state.next_entity_id();
    state.cats.push(Cat {
        id,
        kind,
        pos,
        size,
        vel,
        spawned_at_ms: now_ms,
    });

    log::debug!("Spawned {:?} cat {} at ({:.0}, {:.0})", kind, id, pos.x, pos.y);
    state.events.push(GameEvent::CatSpawned { id, kind });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameMode;
    use crate::sim::state::GamePhase;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running(mode: GameMode, seed: u64) -> GameState {
        let mut state = GameState::new(seed, mode, mode.tuning());
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_no_spawn_unless_running() {
        let mut state = GameState::new(1, GameMode::Classic, GameMode::Classic.tuning());
        spawn_cat(&mut state, 0.0);
        assert!(state.cats.is_empty());

        state.phase = GamePhase::GameOver;
        spawn_cat(&mut state, 0.0);
        assert!(state.cats.is_empty());
    }

    #[test]
    fn test_classic_cats_are_static_and_never_fat() {
        let mut state = running(GameMode::Classic, 3);
        for i in 0..200 {
            spawn_cat(&mut state, i as f64);
        }
        assert_eq!(state.cats.len(), 200);
        assert!(state.cats.iter().all(|c| c.vel == Vec2::ZERO));
        assert!(state.cats.iter().all(|c| c.kind != CatKind::Fat));
        assert!(state.cats.iter().any(|c| c.kind == CatKind::Bad));
    }

    #[test]
    fn test_arcade_velocity_range() {
        let mut state = running(GameMode::Arcade, 5);
        for _ in 0..200 {
            spawn_cat(&mut state, 0.0);
        }
        for cat in &state.cats {
            for v in [cat.vel.x, cat.vel.y] {
                assert!((1.0..=3.0).contains(&v.abs()), "speed {} out of range", v);
            }
        }
        assert!(state.cats.iter().any(|c| c.kind == CatKind::Fat));
    }

    #[test]
    fn test_roll_kind_distribution() {
        let mut rng = Pcg32::seed_from_u64(11);
        let n = 20_000;
        let mut fat = 0;
        let mut bad = 0;
        for _ in 0..n {
            match roll_kind(&mut rng, 0.10, 0.25) {
                CatKind::Fat => fat += 1,
                CatKind::Bad => bad += 1,
                CatKind::Normal => {}
            }
        }
        let fat_ratio = fat as f32 / n as f32;
        // Bad is drawn only when not fat: 0.9 * 0.25
        let bad_ratio = bad as f32 / n as f32;
        assert!((fat_ratio - 0.10).abs() < 0.02);
        assert!((bad_ratio - 0.225).abs() < 0.02);
    }

    #[test]
    fn test_spawn_records_timestamp_and_event() {
        let mut state = running(GameMode::Classic, 9);
        spawn_cat(&mut state, 1234.0);
        assert_eq!(state.cats[0].spawned_at_ms, 1234.0);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::CatSpawned { .. }]
        ));
    }

    proptest! {
        #[test]
        fn prop_spawn_inside_canvas(seed in any::<u64>(), arcade in any::<bool>()) {
            let mode = if arcade { GameMode::Arcade } else { GameMode::Classic };
            let mut state = running(mode, seed);
            for _ in 0..20 {
                spawn_cat(&mut state, 0.0);
            }
            for cat in &state.cats {
                prop_assert!(cat.pos.x >= 0.0 && cat.pos.x <= CANVAS_WIDTH - cat.size.x);
                prop_assert!(cat.pos.y >= 0.0 && cat.pos.y <= CANVAS_HEIGHT - cat.size.y);
            }
        }
    }
}
