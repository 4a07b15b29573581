//! Per-frame simulation and game phase transitions
//!
//! One call to `frame` per display refresh: run any periodic jobs that came
//! due, advance the logic one tick if running, then do render-pass
//! housekeeping. Rendering itself is the host's job.

use std::cmp::Ordering;

use super::clock::run_due_tasks;
use super::collision::resolve_collisions;
use super::input::HeldKeys;
use super::lifetime::{expire_notice, expire_stale, update_floating_texts};
use super::movement::{update_cats, update_player};
use super::state::{CatKind, GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Currently held movement keys
    pub keys: HeldKeys,
    /// Start button (one-shot)
    pub start: bool,
    /// Restart button (one-shot)
    pub restart: bool,
    /// Idle/demo mode - steer toward cats automatically
    pub autopilot: bool,
}

/// Start button: Ready -> Running, otherwise a full restart
pub fn start(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Ready {
        restart(state, now_ms);
        return;
    }

    state.reset_run(now_ms);
    state.phase = GamePhase::Running;
    log::info!("{} game started (seed {})", state.mode.as_str(), state.seed);
    state.events.push(GameEvent::Started);
}

/// Restart button: reset the run and go straight to Running
pub fn restart(state: &mut GameState, now_ms: f64) {
    state.reset_run(now_ms);
    state.phase = GamePhase::Running;
    log::info!("Game restarted");
    state.events.push(GameEvent::Restarted);
}

/// Running -> GameOver. Cancels the cadences and settles the high score once.
pub fn game_over(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.phase = GamePhase::GameOver;
    state.schedule.cancel_all();
    state.notice = None;

    let new_high_score = state.high_scores.record(state.score, state.mode, now_ms);
    log::info!(
        "Game over: score {} (high score {})",
        state.score,
        state.high_scores.best()
    );
    state.events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score,
    });
}

/// Keys that steer the player toward the nearest cat worth points
pub fn autopilot_keys(state: &GameState) -> HeldKeys {
    let me = state.player.center();
    let target = state
        .cats
        .iter()
        .filter(|c| c.kind != CatKind::Bad)
        .map(|c| c.center())
        .min_by(|a, b| {
            a.distance_squared(me)
                .partial_cmp(&b.distance_squared(me))
                .unwrap_or(Ordering::Equal)
        });

    let Some(target) = target else {
        return HeldKeys::default();
    };

    // Dead zone stops jitter once aligned on an axis
    let dead_zone = state.player.speed.max(1.0) * 0.5;
    let delta = target - me;
    HeldKeys {
        up: delta.y < -dead_zone,
        down: delta.y > dead_zone,
        left: delta.x < -dead_zone,
        right: delta.x > dead_zone,
    }
}

/// Advance gameplay by one logic tick. Does nothing unless running.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    state.frame += 1;

    let keys = if input.autopilot {
        autopilot_keys(state)
    } else {
        input.keys
    };
    update_player(&mut state.player, &keys);
    update_cats(state);
    resolve_collisions(state);
}

/// Everything that happens in one display frame at wall-clock `now_ms`
pub fn frame(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if input.restart {
        restart(state, now_ms);
    } else if input.start {
        start(state, now_ms);
    }

    run_due_tasks(state, now_ms);
    tick(state, input);

    // Render-pass housekeeping runs in every phase
    expire_stale(state, now_ms);
    update_floating_texts(state);
    expire_notice(state, now_ms);
}
