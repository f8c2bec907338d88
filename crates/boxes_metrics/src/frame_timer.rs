//! Frame timing statistics

use super::FrameTimeReport;
use std::time::{Duration, Instant};

/// Accumulates per-frame durations between two calls to [`FrameTimer::report`].
pub struct FrameTimer {
    frame_start: Instant,
    frames: u64,
    total: Duration,
    min: Duration,
    max: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            frames: 0,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end(&mut self) {
        self.push(self.frame_start.elapsed());
    }

    fn push(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.total += elapsed;
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
    }

    /// Statistics since the previous report; resets the accumulators.
    pub fn report(&mut self) -> FrameTimeReport {
        if self.frames == 0 {
            return FrameTimeReport::default();
        }

        let report = FrameTimeReport {
            frames: self.frames,
            average_ms: self.total.as_secs_f64() * 1000.0 / self.frames as f64,
            min_ms: self.min.as_secs_f64() * 1000.0,
            max_ms: self.max.as_secs_f64() * 1000.0,
        };

        self.frames = 0;
        self.total = Duration::ZERO;
        self.min = Duration::MAX;
        self.max = Duration::ZERO;
        report
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timer_report() {
        let mut timer = FrameTimer::new();

        timer.push(Duration::from_millis(10));
        timer.push(Duration::from_millis(20));
        timer.push(Duration::from_millis(30));

        let report = timer.report();
        assert_eq!(report.frames, 3);
        assert!((report.average_ms - 20.0).abs() < 1e-9);
        assert!((report.min_ms - 10.0).abs() < 1e-9);
        assert!((report.max_ms - 30.0).abs() < 1e-9);

        // Accumulators reset after a report
        assert_eq!(timer.report(), FrameTimeReport::default());
    }
}
