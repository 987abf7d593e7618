use crate::command::Tick;

/// Number of ticks in one in-game hour.
pub const TICKS_PER_HOUR: Tick = 3600;

/// Configuration for a scheduler.
#[derive(Debug, Clone)]
pub struct SchedConfig {
    /// Game time the clock starts at, in ticks since midnight of day 0.
    pub start_time: Tick,
    /// Maximum firing log size (oldest firings dropped when exceeded). 0 = unlimited.
    pub max_log: usize,
    /// Upper bound on commands executed by a single `run`. `None` = unbounded.
    pub step_limit: Option<u64>,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            start_time: 6 * TICKS_PER_HOUR,
            max_log: 0,
            step_limit: None,
        }
    }
}

impl SchedConfig {
    /// Set the game time the clock starts at.
    pub fn with_start_time(mut self, start: Tick) -> Self {
        self.start_time = start;
        self
    }

    /// Set the maximum firing log size (0 = unlimited).
    pub fn with_max_log(mut self, max: usize) -> Self {
        self.max_log = max;
        self
    }

    /// Bound the number of commands a single `run` may execute.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}
