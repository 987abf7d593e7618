//! Commands the game raises on behalf of patrons and the innkeeper.

use chronos_sched::{BoundCommand, Command, CommandContext, Tick};
use tracing::warn;

use crate::inn::Inn;

/// How long a departure takes.
pub const LEAVE_DURATION: Tick = 10;

/// A patron walks in. On success the matching [`PatronLeave`] is scheduled
/// to fire once this visit's duration has passed.
#[derive(Debug, Clone)]
pub struct PatronEnter {
    patron: String,
    label: Option<String>,
    delay: Tick,
    duration: Tick,
}

impl PatronEnter {
    /// A patron arriving `delay` ticks from now and staying `duration` ticks.
    pub fn new(patron: impl Into<String>, delay: Tick, duration: Tick) -> Self {
        Self {
            patron: patron.into(),
            label: None,
            delay,
            duration,
        }
    }

    /// Describe the patron in the firing log by `label` instead of by name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replace the arrival delay.
    pub fn with_delay(mut self, delay: Tick) -> Self {
        self.delay = delay;
        self
    }

    /// Who is arriving.
    pub fn patron(&self) -> &str {
        &self.patron
    }
}

impl Command<Inn> for PatronEnter {
    fn name(&self) -> &str {
        "PatronEnter"
    }

    fn delay(&self) -> Tick {
        self.delay
    }

    fn duration(&self) -> Tick {
        self.duration
    }

    fn description(&self) -> &str {
        "Move a patron into the common room for a while."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        params.is_empty()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        if !ctx.world.add(&self.patron) {
            ctx.world
                .notice(format!("{} is turned away at the door.", self.patron));
            return false;
        }
        ctx.world.notice(format!("{} enters the inn.", self.patron));

        let leave = PatronLeave::new(self.patron.clone(), self.duration);
        match BoundCommand::parameterless(Box::new(leave)) {
            Ok(bound) => ctx.schedule(bound),
            Err(err) => warn!(%err, patron = %self.patron, "departure not scheduled"),
        }
        true
    }

    fn summary(&self) -> String {
        format!("{} arrives", self.label.as_deref().unwrap_or(&self.patron))
    }
}

/// A patron leaves the common room.
#[derive(Debug, Clone)]
pub struct PatronLeave {
    patron: String,
    delay: Tick,
}

impl PatronLeave {
    /// A patron leaving `delay` ticks from now.
    pub fn new(patron: impl Into<String>, delay: Tick) -> Self {
        Self {
            patron: patron.into(),
            delay,
        }
    }
}

impl Command<Inn> for PatronLeave {
    fn name(&self) -> &str {
        "PatronLeave"
    }

    fn delay(&self) -> Tick {
        self.delay
    }

    fn duration(&self) -> Tick {
        LEAVE_DURATION
    }

    fn description(&self) -> &str {
        "Cause a patron to leave the common room."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        params.is_empty()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        // Closing time may already have turned them out.
        if ctx.world.remove(&self.patron) {
            ctx.world.notice(format!("{} leaves the inn.", self.patron));
            true
        } else {
            false
        }
    }

    fn summary(&self) -> String {
        format!("{} leaves", self.patron)
    }
}

/// Closing time: everyone is sent home and the evening ends.
#[derive(Debug, Clone)]
pub struct CloseInn {
    delay: Tick,
}

impl CloseInn {
    /// Close the inn `delay` ticks from now.
    pub fn new(delay: Tick) -> Self {
        Self { delay }
    }
}

impl Command<Inn> for CloseInn {
    fn name(&self) -> &str {
        "CloseInn"
    }

    fn delay(&self) -> Tick {
        self.delay
    }

    fn duration(&self) -> Tick {
        0
    }

    fn description(&self) -> &str {
        "The innkeeper closes up for the night."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        params.is_empty()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        let turned_out = ctx.world.close();
        ctx.world.notice("The innkeeper calls closing time.");
        if !turned_out.is_empty() {
            ctx.world
                .notice(format!("Shown the door: {}.", turned_out.join(", ")));
        }
        true
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronos_sched::{SchedConfig, Scheduler, StopReason};

    fn bound(cmd: impl Command<Inn> + 'static) -> BoundCommand<Inn> {
        BoundCommand::parameterless(Box::new(cmd)).unwrap()
    }

    #[test]
    fn enter_schedules_departure_after_duration() {
        let mut sched = Scheduler::new(SchedConfig::default().with_start_time(0));
        let mut inn = Inn::new("Test", 4);
        sched.schedule(bound(PatronEnter::new("Sal", 100, 600)));

        let entered = sched.step_once(&mut inn).unwrap();
        assert!(entered.succeeded);
        assert!(inn.contains("Sal"));
        assert_eq!(sched.pending()[0].name, "PatronLeave");
        assert_eq!(sched.time_to_next(), Ok(600));

        let left = sched.step_once(&mut inn).unwrap();
        assert_eq!(left.at, 700);
        assert!(!inn.contains("Sal"));
        assert_eq!(
            inn.drain_notices(),
            vec!["Sal enters the inn.", "Sal leaves the inn."]
        );
    }

    #[test]
    fn full_inn_turns_patron_away_without_departure() {
        let mut sched = Scheduler::new(SchedConfig::default());
        let mut inn = Inn::new("Tiny", 1);
        sched.schedule(bound(PatronEnter::new("Sal", 0, 60)));
        sched.schedule(bound(PatronEnter::new("Boren", 5, 60)));

        sched.step_once(&mut inn).unwrap();
        let turned_away = sched.step_once(&mut inn).unwrap();
        assert!(!turned_away.succeeded);
        assert_eq!(sched.len(), 1);
        assert_eq!(sched.pending()[0].summary, "Sal leaves");
    }

    #[test]
    fn close_ends_the_evening() {
        let mut sched = Scheduler::new(SchedConfig::default());
        let mut inn = Inn::default();
        sched.schedule(bound(PatronEnter::new("Sal", 10, 5_000)));
        sched.schedule(bound(CloseInn::new(3_600)));

        let summary = sched.run(&mut inn);
        assert_eq!(
            summary.stopped,
            StopReason::Terminal {
                name: "CloseInn".into()
            }
        );
        assert!(!inn.is_open());
        assert_eq!(inn.occupancy(), 0);
        // Sal's departure is still queued; it finds the room already empty.
        assert_eq!(sched.len(), 1);
        let late = sched.step_once(&mut inn).unwrap();
        assert!(!late.succeeded);
    }

    #[test]
    fn label_names_the_arrival_but_not_the_guest() {
        let mut sched = Scheduler::new(SchedConfig::default());
        let mut inn = Inn::default();
        sched.schedule(bound(
            PatronEnter::new("Perrin", 0, 60).with_label("Perrin the archer"),
        ));

        let firing = sched.step_once(&mut inn).unwrap();
        assert_eq!(firing.summary, "Perrin the archer arrives");
        assert_eq!(inn.patrons(), ["Perrin".to_string()]);
        assert_eq!(sched.pending()[0].summary, "Perrin leaves");
    }

    #[test]
    fn patron_commands_take_no_parameters() {
        let err = BoundCommand::<Inn>::bind(
            Box::new(PatronLeave::new("Sal", 1)),
            &["now".to_string()],
        );
        assert!(err.is_err());
    }
}
