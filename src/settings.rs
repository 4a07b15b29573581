//! Game settings and preferences
//!
//! Read once at startup from the page URL (web) or the command line (native).
//! Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Round rules preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// One minute, static cats
    #[default]
    Classic,
    /// Thirty seconds, moving cats, fat cats, difficulty ramps up
    Arcade,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Arcade => "Arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "60" => Some(GameMode::Classic),
            "arcade" | "30" => Some(GameMode::Arcade),
            _ => None,
        }
    }

    /// Balance preset for this mode
    pub fn tuning(&self) -> Tuning {
        match self {
            GameMode::Classic => Tuning::classic(),
            GameMode::Arcade => Tuning::arcade(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: GameMode,
    /// Floating "+1"/"-1" text over caught cats (modes that support it)
    pub floating_text: bool,
    /// "Speed Up" banner on escalation (modes that support it)
    pub speed_up_notice: bool,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            floating_text: true,
            speed_up_notice: true,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_mode(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Effective balance: the mode preset with cosmetic toggles applied
    pub fn tuning(&self) -> Tuning {
        let mut tuning = self.mode.tuning();
        if !self.floating_text {
            tuning.floating_text = false;
        }
        if !self.speed_up_notice {
            tuning.notice_ms = 0.0;
        }
        tuning
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse `?mode=arcade&seed=7&floating_text=0` style strings.
    ///
    /// Unknown keys and bad values are logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "mode" => match GameMode::from_str(value) {
                    Some(mode) => settings.mode = mode,
                    None => log::warn!("Unknown mode '{}', using {}", value, settings.mode.as_str()),
                },
                "seed" => match value.parse() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(_) => log::warn!("Ignoring bad seed '{}'", value),
                },
                "floating_text" => settings.floating_text = parse_flag(value),
                "speed_up_notice" => settings.speed_up_notice = parse_flag(value),
                _ => log::warn!("Ignoring unknown setting '{}'", key),
            }
        }

        settings
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let settings = Self::from_query(&search);
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Load settings from `CAT_CATCH_MODE` and the first CLI argument (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut query = String::new();
        if let Ok(mode) = std::env::var("CAT_CATCH_MODE") {
            query.push_str(&format!("mode={}", mode));
        }
        if let Some(arg) = std::env::args().nth(1) {
            if !query.is_empty() {
                query.push('&');
            }
            // Bare mode names are accepted as a shorthand
            if arg.contains('=') {
                query.push_str(&arg);
            } else {
                query.push_str(&format!("mode={}", arg));
            }
        }

        let settings = Self::from_query(&query);
        log::info!("Settings: {:?}", settings);
        settings
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value, "0" | "false" | "off" | "no")
}
