//! Timing instrumentation for editor hot paths.
//!
//! Pointer moves arrive 60+ times per second during a gesture and every
//! commit clones and compares a full scene. `profile_scope!` times a block
//! only when the `profiling` feature is on; [`ScopedTimer::frame`] is always
//! on and warns when a commit blows the frame budget.
//!
//! ```toml
//! [dependencies]
//! notesboard = { features = ["profiling"] }
//! ```

use std::time::Instant;

/// One frame at 60 FPS.
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Blocks faster than this are not reported under `profiling`.
pub const PROFILE_THRESHOLD_MS: f64 = 1.0;

/// Time the rest of the enclosing block. Compiles to nothing without the
/// `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, $crate::perf::PROFILE_THRESHOLD_MS)
    };
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopedTimer::new($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

pub use profile_scope;

#[cfg(feature = "profiling")]
thread_local! {
    static NESTING: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Reports its own lifetime through `tracing` when it exceeds `budget_ms`.
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
    budget_ms: f64,
    #[cfg(feature = "profiling")]
    nesting: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, budget_ms: f64) -> Self {
        Self {
            name,
            started: Instant::now(),
            budget_ms,
            #[cfg(feature = "profiling")]
            nesting: NESTING.with(|n| n.replace(n.get() + 1)),
        }
    }

    /// Timer with a one-frame budget.
    pub fn frame(name: &'static str) -> Self {
        Self::new(name, FRAME_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn over_budget(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        #[cfg(feature = "profiling")]
        NESTING.with(|n| n.set(n.get().saturating_sub(1)));

        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.budget_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        tracing::trace!(
            "{}[PERF] {}: {:.2}ms",
            "  ".repeat(self.nesting),
            self.name,
            elapsed_ms
        );

        #[cfg(not(feature = "profiling"))]
        tracing::warn!(
            operation = self.name,
            elapsed_ms,
            budget_ms = self.budget_ms,
            "operation over budget"
        );
    }
}
