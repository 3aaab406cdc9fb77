//! Frame clock: turns per-frame timestamps into elapsed seconds.
//!
//! `draw_web()` calls at ~60fps with a variable delta. Growth is credited
//! from the actual wall-clock gap between frames, so the catch rate does
//! not depend on the display's refresh rate.

/// Seconds between two millisecond timestamps.
///
/// With no previous timestamp (first frame) this is zero, as is any
/// backwards step.
pub fn elapsed_seconds(prev_ms: Option<f64>, now_ms: f64) -> f64 {
    match prev_ms {
        Some(prev) if now_ms > prev => (now_ms - prev) / 1000.0,
        _ => 0.0,
    }
}

pub struct FrameClock {
    /// Timestamp of the last frame (ms), None before the first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
        }
    }

    /// Feed a timestamp (from `performance.now()` or similar) and return the
    /// seconds elapsed since the previous call.
    ///
    /// Call once per draw frame and pass the result to `Game::tick`.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let elapsed = elapsed_seconds(self.last_timestamp, now_ms);
        if self.last_timestamp.map_or(true, |prev| now_ms >= prev) {
            self.last_timestamp = Some(now_ms);
        }
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Current high-resolution timestamp in milliseconds.
///
/// Uses `performance.now()`, falling back to `Date.now()` when the page has
/// no Performance object.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
