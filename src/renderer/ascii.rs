//! Text-mode renderer for the native build and tests

use std::convert::Infallible;

use glam::Vec2;

use super::{HudSink, RenderSink, game_over_lines, hud_lines};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{CatKind, GameState};

pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_ROWS: usize = 25;

/// Draws the canvas into a character grid.
///
/// `@` player, `c` cat, `x` bad cat, `C` fat cat.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    grid: Vec<Vec<char>>,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            grid: vec![vec![' '; cols]; rows],
        }
    }

    /// The last rendered frame
    pub fn frame(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            CANVAS_WIDTH / self.cols as f32,
            CANVAS_HEIGHT / self.rows as f32,
        )
    }

    fn cell_of(&self, pos: Vec2) -> (usize, usize) {
        let cell = (pos / self.cell_size()).floor().max(Vec2::ZERO);
        (
            (cell.x as usize).min(self.cols - 1),
            (cell.y as usize).min(self.rows - 1),
        )
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, ch: char) {
        let (c0, r0) = self.cell_of(pos);
        let (c1, r1) = self.cell_of(pos + size - Vec2::splat(0.001));
        for row in &mut self.grid[r0..=r1] {
            for cell in &mut row[c0..=c1] {
                *cell = ch;
            }
        }
    }

    fn put_text(&mut self, col: usize, row: usize, text: &str) {
        if row >= self.rows {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.grid[row].get_mut(col + i) {
                *cell = ch;
            }
        }
    }

    fn put_centered(&mut self, row: usize, text: &str) {
        let col = self.cols.saturating_sub(text.chars().count()) / 2;
        self.put_text(col, row, text);
    }
}

impl RenderSink for AsciiRenderer {
    type Error = Infallible;

    fn render(&mut self, state: &GameState, _now_ms: f64) -> Result<(), Infallible> {
        for row in &mut self.grid {
            row.fill(' ');
        }

        for cat in &state.cats {
            let ch = match cat.kind {
                CatKind::Normal => 'c',
                CatKind::Bad => 'x',
                CatKind::Fat => 'C',
            };
            self.fill_rect(cat.pos, cat.size, ch);
        }

        self.fill_rect(state.player.pos, state.player.size, '@');

        for text in &state.floating_texts {
            let (col, row) = self.cell_of(text.pos);
            self.put_text(col, row, &text.label);
        }

        let [score, time] = hud_lines(state);
        self.put_text(1, 0, &score);
        self.put_text(1, 1, &time);

        if let Some(notice) = &state.notice {
            self.put_centered(3, &notice.text);
        }

        if let Some([title, final_score]) = game_over_lines(state) {
            // Dim everything under the overlay
            for row in &mut self.grid {
                for cell in row.iter_mut().filter(|c| **c == ' ') {
                    *cell = '.';
                }
            }
            let mid = self.rows / 2;
            self.put_centered(mid.saturating_sub(1), &title);
            self.put_centered(mid + 1, &final_score);
        }

        Ok(())
    }
}

/// HUD sink that logs every change
#[derive(Debug, Default)]
pub struct LogHud;

impl HudSink for LogHud {
    fn set_score(&mut self, score: i64) {
        log::info!("Score: {}", score);
    }

    fn set_time_left(&mut self, secs: u32) {
        log::debug!("Time left: {}", secs);
    }

    fn set_high_score(&mut self, score: i64) {
        log::info!("High score: {}", score);
    }
}
