use crate::command::Tick;

const TICKS_PER_DAY: Tick = 24 * 3600;

/// Logical game clock. Advanced only by the scheduler, by the delta of each
/// popped event; it never reads wall-clock time.
#[derive(Debug, Clone)]
pub struct GameClock {
    start: Tick,
    now: Tick,
}

impl GameClock {
    /// Create a clock reading `start` ticks.
    pub fn new(start: Tick) -> Self {
        Self { start, now: start }
    }

    /// Move the clock forward by `ticks`. Returns the new time.
    pub fn advance(&mut self, ticks: Tick) -> Tick {
        self.now = self.now.saturating_add(ticks);
        self.now
    }

    /// Current game time in ticks.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Ticks elapsed since the clock was created.
    pub fn elapsed(&self) -> Tick {
        self.now - self.start
    }

    /// Zero-based day number of the current time.
    pub fn day(&self) -> u64 {
        self.now / TICKS_PER_DAY
    }

    /// Time of day formatted as `HH:MM:SS`.
    pub fn time_of_day(&self) -> String {
        format_time_of_day(self.now)
    }
}

/// Format an absolute tick count as `HH:MM:SS`, wrapping at midnight.
pub fn format_time_of_day(ticks: Tick) -> String {
    let secs = ticks % TICKS_PER_DAY;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = GameClock::new(6 * 3600);
        assert_eq!(clock.now(), 21_600);
        assert_eq!(clock.elapsed(), 0);
        assert_eq!(clock.time_of_day(), "06:00:00");
    }

    #[test]
    fn clock_advance_accumulates() {
        let mut clock = GameClock::new(0);
        clock.advance(59);
        clock.advance(61);
        assert_eq!(clock.now(), 120);
        assert_eq!(clock.time_of_day(), "00:02:00");
    }

    #[test]
    fn clock_wraps_past_midnight() {
        let mut clock = GameClock::new(23 * 3600);
        clock.advance(3600 + 5);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.time_of_day(), "00:00:05");
        assert_eq!(clock.elapsed(), 3605);
    }
}
