//! Spawn throttling
//!
//! Spawns are rate-limited against wall-clock time sampled by the caller.

use std::time::{Duration, Instant};

/// Minimum time between two spawns.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(500);

/// Remembers the last accepted spawn.
#[derive(Debug, Clone)]
pub struct SpawnThrottle {
    interval: Duration,
    last_spawn: Instant,
}

impl SpawnThrottle {
    /// The throttle counts `now` as a spawn, so the first accepted spawn is
    /// at least one interval later.
    pub fn new(now: Instant) -> Self {
        Self::with_interval(SPAWN_INTERVAL, now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_spawn: now,
        }
    }

    pub fn last_spawn(&self) -> Instant {
        self.last_spawn
    }

    /// Accepts a spawn at `now` if a full interval has passed, recording it.
    pub fn try_spawn(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_spawn) < self.interval {
            return false;
        }
        self.last_spawn = now;
        true
    }
}
