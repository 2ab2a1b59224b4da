//! Timing for the pointer handlers and hit tests.
//!
//! Handlers dispatched through [`crate::Board`] are always timed and a
//! `warn!` is logged when one overruns [`SLOW_HANDLER_MS`]. Finer-grained
//! timing inside the handlers uses [`profile_scope!`], which only does
//! anything with the `profiling` feature:
//!
//! ```ignore
//! fn pointer_move(..) {
//!     profile_scope!("pointer_move");
//!     // ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_MS;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Time the enclosing scope. Expands to nothing without `profiling`.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, 1.0);
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _scope = $crate::perf::ScopedTimer::profiling($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// How an overrun is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    /// `warn!`, for timings that matter in production
    Warn,
    /// `trace!`, for profiling builds
    Trace,
}

/// Reports on drop when the scope ran longer than its threshold.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold: Duration,
    report: Report,
}

impl ScopedTimer {
    /// Timer that warns past `threshold_ms`.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self::with_report(name, threshold_ms, Report::Warn)
    }

    /// Timer with the pointer-handler budget.
    pub fn for_handler(name: &'static str) -> Self {
        Self::new(name, SLOW_HANDLER_MS)
    }

    /// Timer that traces past `threshold_ms`; used by [`profile_scope!`].
    pub fn profiling(name: &'static str, threshold_ms: f64) -> Self {
        Self::with_report(name, threshold_ms, Report::Trace)
    }

    fn with_report(name: &'static str, threshold_ms: f64, report: Report) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold: threshold_from_ms(threshold_ms),
            report,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed_ms(&self) -> f64 {
        to_ms(self.start.elapsed())
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if elapsed <= self.threshold {
            return;
        }
        match self.report {
            Report::Warn => warn_slow(self.name, elapsed, self.threshold),
            Report::Trace => {
                trace!(operation = self.name, elapsed_ms = to_ms(elapsed), "Profiled scope")
            }
        }
    }
}

/// Run `f`, returning its result and how long it took in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, to_ms(start.elapsed()))
}

/// Run `f`, warning when it takes longer than `threshold_ms`.
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let _timer = NamedTimer {
        name,
        start: Instant::now(),
        threshold_ms,
    };
    f()
}

/// [`ScopedTimer`] for names that are not `'static`.
struct NamedTimer<'a> {
    name: &'a str,
    start: Instant,
    threshold_ms: f64,
}

impl Drop for NamedTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if to_ms(elapsed) > self.threshold_ms {
            warn_slow(self.name, elapsed, threshold_from_ms(self.threshold_ms));
        }
    }
}

fn warn_slow(name: &str, elapsed: Duration, threshold: Duration) {
    warn!(
        operation = name,
        elapsed_ms = format!("{:.2}", to_ms(elapsed)),
        threshold_ms = format!("{:.2}", to_ms(threshold)),
        "Slow operation"
    );
}

#[inline]
fn to_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Negative and NaN thresholds become zero.
fn threshold_from_ms(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}
