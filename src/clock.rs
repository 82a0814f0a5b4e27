//! Time source abstraction
//!
//! Browser/native differences for "now" live behind the `Clock` trait so
//! binder logic runs identically in tests and on wasm32.

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Source of the current instant.
pub trait Clock {
    fn now_ms(&self) -> EpochMillis;
}

/// Wall clock (`js_sys::Date::now()` on web, `SystemTime` on native).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        js_sys::Date::now() as EpochMillis
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as EpochMillis)
            .unwrap_or(0)
    }
}

/// Fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub EpochMillis);

impl Clock for FixedClock {
    fn now_ms(&self) -> EpochMillis {
        self.0
    }
}
