//! Rendering module
//!
//! The simulation never draws. Hosts hand a `GameState` to a `RenderSink`
//! once per frame and mirror the HUD numbers through a `HudSink`.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use ascii::{AsciiRenderer, LogHud};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::{Canvas2dRenderer, DomHud};

use crate::sim::{GamePhase, GameState};

/// Draws one frame of the game
pub trait RenderSink {
    type Error;

    fn render(&mut self, state: &GameState, now_ms: f64) -> Result<(), Self::Error>;
}

/// Externally owned score/time/high score displays
pub trait HudSink {
    fn set_score(&mut self, score: i64);
    fn set_time_left(&mut self, secs: u32);
    fn set_high_score(&mut self, score: i64);
}

/// Pushes HUD values to a sink only when they change
#[derive(Debug, Clone, Default)]
pub struct HudMirror {
    score: Option<i64>,
    time_left: Option<u32>,
    high_score: Option<i64>,
}

impl HudMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values pushed
    pub fn sync<S: HudSink + ?Sized>(&mut self, state: &GameState, sink: &mut S) -> usize {
        let mut pushed = 0;

        if self.score != Some(state.score) {
            sink.set_score(state.score);
            self.score = Some(state.score);
            pushed += 1;
        }
        if self.time_left != Some(state.time_left) {
            sink.set_time_left(state.time_left);
            self.time_left = Some(state.time_left);
            pushed += 1;
        }
        let best = state.high_scores.best();
        if self.high_score != Some(best) {
            sink.set_high_score(best);
            self.high_score = Some(best);
            pushed += 1;
        }

        pushed
    }
}

/// In-canvas HUD text
pub fn hud_lines(state: &GameState) -> [String; 2] {
    [
        format!("Score: {}", state.score),
        format!("Time Left: {}", state.time_left),
    ]
}

/// Overlay text while the game is over
pub fn game_over_lines(state: &GameState) -> Option<[String; 2]> {
    (state.phase == GamePhase::GameOver)
        .then(|| ["GAME OVER".to_string(), format!("Final Score: {}", state.score)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameMode;

    #[derive(Default)]
    struct RecordingHud {
        calls: Vec<String>,
    }

    impl HudSink for RecordingHud {
        fn set_score(&mut self, score: i64) {
            self.calls.push(format!("score={}", score));
        }
        fn set_time_left(&mut self, secs: u32) {
            self.calls.push(format!("time={}", secs));
        }
        fn set_high_score(&mut self, score: i64) {
            self.calls.push(format!("high={}", score));
        }
    }

    #[test]
    fn test_hud_mirror_pushes_changes_only() {
        let mut state = GameState::new(1, GameMode::Classic, GameMode::Classic.tuning());
        let mut hud = RecordingHud::default();
        let mut mirror = HudMirror::new();

        assert_eq!(mirror.sync(&state, &mut hud), 3);
        assert_eq!(mirror.sync(&state, &mut hud), 0);

        state.score = -1;
        assert_eq!(mirror.sync(&state, &mut hud), 1);
        assert_eq!(hud.calls.last().map(String::as_str), Some("score=-1"));
    }

    #[test]
    fn test_overlay_only_when_game_over() {
        let mut state = GameState::new(1, GameMode::Classic, GameMode::Classic.tuning());
        assert!(game_over_lines(&state).is_none());

        state.phase = GamePhase::GameOver;
        state.score = 12;
        let lines = game_over_lines(&state).unwrap();
        assert_eq!(lines[0], "GAME OVER");
        assert_eq!(lines[1], "Final Score: 12");
    }
}
