//! Data-driven game balance
//!
//! Every number the simulation reads lives here, so a mode is just a preset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Countdown length in seconds
    pub round_secs: u32,

    // === Player ===
    pub player_speed: f32,
    /// Added to player speed on every escalation
    pub speed_step: f32,

    // === Spawning ===
    /// Spawn cadences in milliseconds (one independent timer each)
    pub spawn_periods_ms: Vec<f64>,
    pub fat_chance: f32,
    pub bad_chance: f32,
    pub bad_chance_step: f32,
    pub bad_chance_cap: f32,
    /// Per-axis cat speed range (pixels per frame); `None` = static cats
    pub cat_speed: Option<(f32, f32)>,
    /// Time-to-live for cats; `None` = cats stay until caught
    pub cat_ttl_ms: Option<f64>,

    // === Difficulty ===
    pub escalation: bool,
    pub notice_ms: f64,

    // === Collision ===
    pub hitbox_padding: f32,

    // === Feedback ===
    pub floating_text: bool,
    /// Alpha lost per tick
    pub text_fade_step: f32,
    /// Pixels per tick (negative = upward)
    pub text_drift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    /// One minute, static cats, a single spawn timer
    pub fn classic() -> Self {
        Self {
            round_secs: 60,

            player_speed: PLAYER_SPEED,
            speed_step: 0.0,

            spawn_periods_ms: vec![SPAWN_PERIOD_MS],
            fat_chance: 0.0,
            bad_chance: 0.25,
            bad_chance_step: 0.0,
            bad_chance_cap: 0.25,
            cat_speed: None,
            cat_ttl_ms: Some(CAT_TTL_MS),

            escalation: false,
            notice_ms: 0.0,

            hitbox_padding: HITBOX_PADDING,

            floating_text: false,
            text_fade_step: 0.02,
            text_drift: -0.5,
        }
    }

    /// Thirty seconds, moving cats, fat cats, escalation and extra spawners
    pub fn arcade() -> Self {
        Self {
            round_secs: 30,
            speed_step: 0.5,
            spawn_periods_ms: vec![SPAWN_PERIOD_MS, 1100.0, 1200.0],
            fat_chance: 0.10,
            bad_chance_step: 0.10,
            bad_chance_cap: 0.70,
            cat_speed: Some((1.0, 3.0)),
            escalation: true,
            notice_ms: 1200.0,
            floating_text: true,
            ..Self::classic()
        }
    }

    /// Next bad-cat chance after one escalation step
    pub fn escalated_bad_chance(&self, current: f32) -> f32 {
        (current + self.bad_chance_step).min(self.bad_chance_cap.max(current))
    }
}
