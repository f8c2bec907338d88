//! Boxes Metrics - frame-rate accounting
//!
//! `FpsCounter` is always available: the window title shows frames per
//! second, so counting frames is part of normal operation.
//!
//! `FrameTimer` collects per-frame CPU time statistics. It only does work
//! with the `metrics` feature; without it the type is a zero-sized stub.
//!
//! # Usage
//!
//! ```ignore
//! use boxes_metrics::{FpsCounter, FrameTimer};
//!
//! let mut fps = FpsCounter::new(Instant::now());
//! let mut timer = FrameTimer::new();
//! timer.begin();
//! // ... do work ...
//! timer.end();
//! fps.record_frame();
//! if let Some(frames) = fps.poll(Instant::now()) {
//!     println!("fps={frames}, avg={:.2}ms", timer.report().average_ms);
//! }
//! ```

mod fps_counter;
#[cfg(feature = "metrics")]
mod frame_timer;

pub use fps_counter::{FpsCounter, FPS_REPORT_INTERVAL};
#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;

/// Frame-time statistics accumulated since the previous report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimeReport {
    pub frames: u64,
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

// ============================================================================
// Macros for conditional compilation
// ============================================================================

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new() -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn report(&mut self) -> FrameTimeReport { FrameTimeReport::default() }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compiles_without_metrics() {
        // Ensure the timer API is identical with and without the feature
        let mut timer = super::FrameTimer::new();
        timer.begin();
        timer.end();
        let _report = timer.report();
    }
}
