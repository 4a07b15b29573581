//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, passed by
//! reference to each system. Nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::Schedule;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::settings::GameMode;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start
    Ready,
    /// Countdown running, cats spawning
    Running,
    /// Timer hit zero; only rendering continues
    GameOver,
}

/// An RGB color for feedback text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string for the given alpha
    pub fn to_css(&self, alpha: f32) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

/// Cat categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatKind {
    #[default]
    Normal,
    /// Costs a point
    Bad,
    /// Worth double, bigger sprite
    Fat,
}

impl CatKind {
    /// Score change on capture
    pub fn score_delta(&self) -> i64 {
        match self {
            CatKind::Normal => 1,
            CatKind::Bad => -1,
            CatKind::Fat => 2,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            CatKind::Fat => Vec2::splat(FAT_CAT_SIZE),
            CatKind::Normal | CatKind::Bad => Vec2::splat(CAT_SIZE),
        }
    }

    /// Floating text label on capture
    pub fn label(&self) -> &'static str {
        match self {
            CatKind::Normal => "+1",
            CatKind::Bad => "-1",
            CatKind::Fat => "+2",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            CatKind::Normal => Rgb::new(46, 204, 64),
            CatKind::Bad => Rgb::new(255, 65, 54),
            CatKind::Fat => Rgb::new(255, 193, 7),
        }
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::splat(PLAYER_SIZE),
            speed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// A collectible cat
#[derive(Debug, Clone)]
pub struct Cat {
    pub id: u32,
    pub kind: CatKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame (zero for static cats)
    pub vel: Vec2,
    /// Wall clock (ms) at spawn
    pub spawned_at_ms: f64,
}

impl Cat {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.spawned_at_ms
    }
}

/// Floating score text (render-only)
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub label: String,
    pub pos: Vec2,
    pub color: Rgb,
    /// 1.0 at spawn, removed once <= 0
    pub alpha: f32,
    /// Pixels per tick
    pub drift: f32,
}

/// Transient banner ("Speed Up")
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at_ms: f64,
}

/// Escalating difficulty
#[derive(Debug, Clone)]
pub struct Difficulty {
    /// Probability a non-fat cat is bad
    pub bad_chance: f32,
    /// Number of escalations this run
    pub level: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bad_chance: tuning.bad_chance,
            level: 0,
        }
    }
}

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Restarted,
    CatSpawned { id: u32, kind: CatKind },
    CatCaught { id: u32, kind: CatKind, delta: i64 },
    CatExpired { id: u32 },
    SpeedUp { level: u32 },
    GameOver { score: i64, new_high_score: bool },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub mode: GameMode,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Unordered; removal order is irrelevant
    pub cats: Vec<Cat>,
    /// Visual feedback (not gameplay-affecting)
    pub floating_texts: Vec<FloatingText>,
    pub notice: Option<Notice>,
    pub score: i64,
    /// Seconds remaining, floor 0
    pub time_left: u32,
    pub difficulty: Difficulty,
    /// Countdown and spawn cadences
    pub schedule: Schedule,
    /// Survives restarts
    pub high_scores: HighScores,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
    /// Logic ticks this run
    pub frame: u64,
    next_id: u32,
}

impl GameState {
    /// Create a game in the Ready phase
    pub fn new(seed: u64, mode: GameMode, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode,
            phase: GamePhase::Ready,
            player: Player::new(tuning.player_speed),
            cats: Vec::new(),
            floating_texts: Vec::new(),
            notice: None,
            score: 0,
            time_left: tuning.round_secs,
            difficulty: Difficulty::new(&tuning),
            schedule: Schedule::new(&tuning),
            high_scores: HighScores::new(),
            events: Vec::new(),
            frame: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything a run owns and re-arm the cadences at `now_ms`.
    ///
    /// The high score and RNG stream carry over.
    pub fn reset_run(&mut self, now_ms: f64) {
        self.schedule.cancel_all();

        self.player = Player::new(self.tuning.player_speed);
        self.cats.clear();
        self.floating_texts.clear();
        self.notice = None;
        self.score = 0;
        self.time_left = self.tuning.round_secs;
        self.difficulty = Difficulty::new(&self.tuning);
        self.frame = 0;

        self.schedule.arm_all(now_ms);
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
