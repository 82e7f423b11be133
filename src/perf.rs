//! Profiling instrumentation for the input handlers.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! omegaboard = { features = ["profiling"] }
//! ```
//!
//! Without the feature `profile_scope!` expands to nothing measurable.

use std::time::Instant;
use tracing::warn;

/// Pointer handlers should finish well inside one 60 FPS frame
pub const HANDLER_BUDGET_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// ```ignore
/// fn handle_pointer_move() {
///     profile_scope!("handle_pointer_move");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::HANDLER_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

/// Logs a warning on drop if the scope took longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
