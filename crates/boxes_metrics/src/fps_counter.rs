//! Once-per-interval frame counter

use std::time::{Duration, Instant};

/// How often the frame count is reported and reset.
pub const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented frames and hands the count out once per interval.
///
/// The count is not averaged: a report after 1.3 s of frames reports the
/// raw number of frames in that window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u64,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the frame count and starts a new window if the current one
    /// has lasted at least [`FPS_REPORT_INTERVAL`].
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        if now.saturating_duration_since(self.window_start) < FPS_REPORT_INTERVAL {
            return None;
        }

        let frames = self.frames;
        self.window_start = now;
        self.frames = 0;
        Some(frames)
    }
}
