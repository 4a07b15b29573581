//! Countdown timer, spawn cadences and difficulty escalation
//!
//! Periodic work runs on wall-clock cadences that are independent of the
//! frame rate. Cadences are owned by the game state, so a restart cancels
//! the old ones before arming new ones and they can never pile up.

use super::spawn::spawn_cat;
use super::state::{GameEvent, GameState, Notice};
use super::tick::game_over;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which periodic job is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Countdown,
    /// Spawner by index into `Tuning::spawn_periods_ms`
    Spawn(usize),
}

/// A cancellable fixed-period timer
#[derive(Debug, Clone)]
pub struct Cadence {
    pub period_ms: f64,
    next_due_ms: Option<f64>,
}

impl Cadence {
    /// Create a disarmed cadence
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            next_due_ms: None,
        }
    }

    /// First firing one period after `now_ms`
    pub fn arm(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    /// Move to the next period; returns the time this firing was due
    fn advance(&mut self) -> Option<f64> {
        let due = self.next_due_ms?;
        self.next_due_ms = Some(due + self.period_ms);
        Some(due)
    }
}

/// All periodic jobs of a run
#[derive(Debug, Clone)]
pub struct Schedule {
    countdown: Cadence,
    spawners: Vec<Cadence>,
}

impl Schedule {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: Cadence::new(COUNTDOWN_PERIOD_MS),
            spawners: tuning
                .spawn_periods_ms
                .iter()
                .map(|&period| Cadence::new(period))
                .collect(),
        }
    }

    pub fn arm_all(&mut self, now_ms: f64) {
        self.countdown.arm(now_ms);
        for spawner in &mut self.spawners {
            spawner.arm(now_ms);
        }
    }

    pub fn cancel_all(&mut self) {
        self.countdown.cancel();
        for spawner in &mut self.spawners {
            spawner.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_count() > 0
    }

    /// Number of live cadences (countdown included)
    pub fn armed_count(&self) -> usize {
        self.countdown.is_armed() as usize
            + self.spawners.iter().filter(|s| s.is_armed()).count()
    }

    /// Re-arm every live spawner from `now_ms`, dropping missed spawns.
    ///
    /// The countdown is left alone so no seconds are lost.
    pub fn resync_spawners(&mut self, now_ms: f64) {
        for spawner in self.spawners.iter_mut().filter(|s| s.is_armed()) {
            spawner.arm(now_ms);
        }
    }

    /// Pop the earliest job due at or before `now_ms`.
    ///
    /// Ties go to the countdown, then spawners in order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(Task, f64)> {
        let mut best: Option<(Task, f64)> = None;

        let candidates = std::iter::once((Task::Countdown, &self.countdown)).chain(
            self.spawners
                .iter()
                .enumerate()
                .map(|(i, s)| (Task::Spawn(i), s)),
        );
        for (task, cadence) in candidates {
            if let Some(due) = cadence.next_due_ms() {
                let earlier = best.map(|(_, b)| due < b).unwrap_or(true);
                if due <= now_ms && earlier {
                    best = Some((task, due));
                }
            }
        }

        let (task, _) = best?;
        let cadence = match task {
            Task::Countdown => &mut self.countdown,
            Task::Spawn(i) => &mut self.spawners[i],
        };
        cadence.advance().map(|due| (task, due))
    }
}

/// Fire every periodic job due by `now_ms`, in due order.
///
/// The countdown always catches up in full. Spawns are capped per frame;
/// past the cap the spawners skip ahead to `now_ms`. Stops early if the run
/// ends mid-way (game over cancels the rest).
pub fn run_due_tasks(state: &mut GameState, now_ms: f64) {
    let mut spawned = 0;
    while state.is_running() {
        let Some((task, due_ms)) = state.schedule.pop_due(now_ms) else {
            break;
        };
        match task {
            Task::Countdown => countdown_tick(state, due_ms),
            Task::Spawn(_) => {
                spawn_cat(state, due_ms);
                spawned += 1;
                if spawned >= MAX_SPAWNS_PER_FRAME {
                    log::warn!(
                        "Spawned {} cats in one frame, resyncing spawners",
                        spawned
                    );
                    state.schedule.resync_spawners(now_ms);
                }
            }
        }
    }
}

/// One second of countdown
pub fn countdown_tick(state: &mut GameState, now_ms: f64) {
    if !state.is_running() {
        return;
    }

    state.time_left = state.time_left.saturating_sub(1);

    if state.time_left == 0 {
        game_over(state, now_ms);
        return;
    }

    if state.tuning.escalation && state.time_left.is_multiple_of(ESCALATION_EVERY_SECS) {
        escalate(state, now_ms);
    }
}

/// Speed the player up and make bad cats more likely
pub fn escalate(state: &mut GameState, now_ms: f64) {
    let tuning = &state.tuning;
    state.player.speed += tuning.speed_step;
    state.difficulty.bad_chance = tuning.escalated_bad_chance(state.difficulty.bad_chance);
    state.difficulty.level += 1;

    if tuning.notice_ms > 0.0 {
        state.notice = Some(Notice {
            text: "Speed Up!".to_string(),
            expires_at_ms: now_ms + tuning.notice_ms,
        });
    }

    log::info!(
        "Speed up {}: player speed {:.1}, bad chance {:.2}",
        state.difficulty.level,
        state.player.speed,
        state.difficulty.bad_chance
    );
    state.events.push(GameEvent::SpeedUp {
        level: state.difficulty.level,
    });
}
