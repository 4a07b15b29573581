//! Per-frame housekeeping: stale cats, fading text, expired notices

use super::state::{GameEvent, GameState};

/// Drop cats that have been on screen for the TTL or longer.
///
/// No score change; they just vanish. Returns how many were removed.
pub fn expire_stale(state: &mut GameState, now_ms: f64) -> usize {
    let Some(ttl) = state.tuning.cat_ttl_ms else {
        return 0;
    };

    let before = state.cats.len();
    let events = &mut state.events;
    state.cats.retain(|cat| {
        let alive = cat.age_ms(now_ms) < ttl;
        if !alive {
            log::debug!("Cat {} expired", cat.id);
            events.push(GameEvent::CatExpired { id: cat.id });
        }
        alive
    });
    before - state.cats.len()
}

/// Drift and fade floating text, dropping fully faded ones
pub fn update_floating_texts(state: &mut GameState) {
    let fade = state.tuning.text_fade_step;
    for text in state.floating_texts.iter_mut() {
        text.pos.y += text.drift;
        text.alpha -= fade;
    }
    state.floating_texts.retain(|t| t.alpha > 0.0);
}

/// Clear the banner once its time is up
pub fn expire_notice(state: &mut GameState, now_ms: f64) {
    if state
        .notice
        .as_ref()
        .is_some_and(|n| now_ms >= n.expires_at_ms)
    {
        state.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameMode;
    use crate::sim::state::{Cat, CatKind, FloatingText, Notice, Rgb};
    use glam::Vec2;

    fn state_with_cat(mode: GameMode, spawned_at_ms: f64) -> GameState {
        let mut state = GameState::new(1, mode, mode.tuning());
        let id = state.next_entity_id();
        state.cats.push(Cat {
            id,
            kind: CatKind::Normal,
            pos: Vec2::new(10.0, 10.0),
            size: CatKind::Normal.size(),
            vel: Vec2::ZERO,
            spawned_at_ms,
        });
        state
    }

    #[test]
    fn test_cat_older_than_ttl_vanishes() {
        let mut state = state_with_cat(GameMode::Classic, 0.0);
        assert_eq!(expire_stale(&mut state, 4999.0), 0);
        assert_eq!(expire_stale(&mut state, 5001.0), 1);
        assert!(state.cats.is_empty());
        assert_eq!(state.score, 0);
        assert!(matches!(state.events.as_slice(), [GameEvent::CatExpired { .. }]));
    }

    #[test]
    fn test_exact_ttl_expires() {
        let mut state = state_with_cat(GameMode::Classic, 1000.0);
        assert_eq!(expire_stale(&mut state, 6000.0), 1);
    }

    #[test]
    fn test_no_ttl_keeps_cats() {
        let mut state = state_with_cat(GameMode::Classic, 0.0);
        state.tuning.cat_ttl_ms = None;
        assert_eq!(expire_stale(&mut state, 1e9), 0);
        assert_eq!(state.cats.len(), 1);
    }

    #[test]
    fn test_text_fades_out() {
        let mut state = GameState::new(1, GameMode::Arcade, GameMode::Arcade.tuning());
        state.floating_texts.push(FloatingText {
            label: "+1".to_string(),
            pos: Vec2::new(50.0, 50.0),
            color: Rgb::new(0, 255, 0),
            alpha: 1.0,
            drift: -0.5,
        });

        update_floating_texts(&mut state);
        assert_eq!(state.floating_texts[0].pos.y, 49.5);
        assert!((state.floating_texts[0].alpha - 0.98).abs() < 1e-6);

        for _ in 0..60 {
            update_floating_texts(&mut state);
        }
        assert!(state.floating_texts.is_empty());
    }

    #[test]
    fn test_notice_expires() {
        let mut state = GameState::new(1, GameMode::Arcade, GameMode::Arcade.tuning());
        state.notice = Some(Notice {
            text: "Speed Up!".to_string(),
            expires_at_ms: 1200.0,
        });
        expire_notice(&mut state, 1199.0);
        assert!(state.notice.is_some());
        expire_notice(&mut state, 1200.0);
        assert!(state.notice.is_none());
    }
}
