//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall clock time
//! - Run seeds

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Seed for a new run: the configured one, else the clock
pub fn run_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| now_ms() as u64)
}
