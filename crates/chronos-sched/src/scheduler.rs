use tracing::{debug, info, trace};

use crate::clock::GameClock;
use crate::command::{BoundCommand, Command, Tick};
use crate::config::SchedConfig;
use crate::context::CommandContext;
use crate::delta_queue::DeltaQueue;
use crate::error::{SchedError, SchedResult};
use crate::log::{Firing, FiringLog};

/// Why the scheduler stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Nothing was left to fire.
    Drained,
    /// A terminal command executed.
    Terminal {
        /// Name of the terminal command.
        name: String,
    },
    /// The configured step limit was reached with work still pending.
    StepLimit,
}

/// Lifecycle of a scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing has fired yet.
    Idle,
    /// Commands are being fired.
    Running,
    /// Firing stopped. Scheduling more work and stepping again resumes it.
    Stopped(StopReason),
}

/// Outcome of [`Scheduler::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed by this run.
    pub steps: u64,
    /// Game time when the run began.
    pub started_at: Tick,
    /// Game time when the run ended.
    pub finished_at: Tick,
    /// Why the run ended.
    pub stopped: StopReason,
}

/// A pending command as seen from outside the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    /// The command's name.
    pub name: String,
    /// Ticks from now until it fires.
    pub fires_in: Tick,
    /// The command's own account of itself.
    pub summary: String,
}

/// Owns the delta queue and the game clock, and fires commands in time order.
///
/// Commands may schedule further commands while they execute; those land in
/// the same queue before the current step returns.
pub struct Scheduler<W> {
    queue: DeltaQueue<BoundCommand<W>>,
    clock: GameClock,
    log: FiringLog,
    step_limit: Option<u64>,
    state: SchedulerState,
}

impl<W> std::fmt::Debug for Scheduler<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.clock.now())
            .field("pending", &self.queue.len())
            .field("fired", &self.log.len())
            .field("state", &self.state)
            .finish()
    }
}

impl<W> Default for Scheduler<W> {
    fn default() -> Self {
        Self::new(SchedConfig::default())
    }
}

impl<W> Scheduler<W> {
    /// Create an idle scheduler with an empty queue.
    pub fn new(config: SchedConfig) -> Self {
        Self {
            queue: DeltaQueue::new(),
            clock: GameClock::new(config.start_time),
            log: FiringLog::new(config.max_log),
            step_limit: config.step_limit,
            state: SchedulerState::Idle,
        }
    }

    /// Queue a bound command to fire its delay after the current time.
    pub fn schedule(&mut self, command: BoundCommand<W>) {
        let delay = command.command().delay();
        let pos = self.queue.insert(delay, command);
        trace!(now = self.clock.now(), delay, pos, pending = self.queue.len(), "scheduled");
    }

    /// Bind `params` to `command` and queue it. A rejected command is dropped.
    pub fn schedule_with(&mut self, command: Box<dyn Command<W>>, params: &[String]) -> SchedResult<()> {
        let bound = BoundCommand::bind(command, params)?;
        self.schedule(bound);
        Ok(())
    }

    /// Advance the clock to the next command and execute it.
    pub fn step_once(&mut self, world: &mut W) -> SchedResult<Firing> {
        let wait = self.queue.time_to_next()?;
        let mut bound = self.queue.pop_next()?;
        self.state = SchedulerState::Running;
        let now = self.clock.advance(wait);

        let succeeded = {
            let mut ctx = CommandContext::new(world, now, &mut self.queue);
            bound.command_mut().execute(&mut ctx)
        };

        let command = bound.command();
        let firing = Firing::new(now, command.name(), command.summary(), succeeded);
        debug!(
            at = %firing.time_of_day(),
            name = %firing.name,
            succeeded,
            pending = self.queue.len(),
            "fired"
        );
        self.log.push(firing.clone());

        if command.is_terminal() {
            self.state = SchedulerState::Stopped(StopReason::Terminal {
                name: firing.name.clone(),
            });
        } else if self.queue.is_empty() {
            self.state = SchedulerState::Stopped(StopReason::Drained);
        }
        Ok(firing)
    }

    /// Fire commands until the queue drains, a terminal command executes, or
    /// the step limit is reached.
    pub fn run(&mut self, world: &mut W) -> RunSummary {
        let started_at = self.clock.now();
        self.state = SchedulerState::Running;
        info!(pending = self.queue.len(), at = %self.clock.time_of_day(), "run started");

        let mut steps = 0;
        let stopped = loop {
            if self.queue.is_empty() {
                break StopReason::Drained;
            }
            if self.step_limit.is_some_and(|limit| steps >= limit) {
                break StopReason::StepLimit;
            }
            match self.step_once(world) {
                Ok(_) => steps += 1,
                Err(_) => break StopReason::Drained,
            }
            if let SchedulerState::Stopped(reason @ StopReason::Terminal { .. }) = &self.state {
                break reason.clone();
            }
        };

        self.state = SchedulerState::Stopped(stopped.clone());
        info!(steps, at = %self.clock.time_of_day(), reason = ?stopped, "run stopped");
        RunSummary {
            steps,
            started_at,
            finished_at: self.clock.now(),
            stopped,
        }
    }

    /// Fire queued commands until one typed by the player has executed.
    ///
    /// Returns every firing of this call, the player's command last. Stops
    /// early, without error, if a terminal command fires first.
    pub fn step_to_user_command(&mut self, world: &mut W) -> SchedResult<Vec<Firing>> {
        let mut fired = Vec::new();
        loop {
            let is_user = match self.queue.peek() {
                Some(next) => next.command().is_user_input(),
                None => return Err(SchedError::EmptyQueue),
            };
            fired.push(self.step_once(world)?);
            let terminal = matches!(
                self.state,
                SchedulerState::Stopped(StopReason::Terminal { .. })
            );
            if is_user || terminal {
                return Ok(fired);
            }
        }
    }

    /// Ticks until the next command fires.
    pub fn time_to_next(&self) -> SchedResult<Tick> {
        self.queue.time_to_next()
    }

    /// `true` when no command is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Snapshot of pending commands in fire order.
    pub fn pending(&self) -> Vec<Pending> {
        self.queue
            .iter()
            .map(|(fires_in, bound)| Pending {
                name: bound.command().name().to_string(),
                fires_in,
                summary: bound.command().summary(),
            })
            .collect()
    }

    /// Discard every pending command.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    /// Current game time.
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// The game clock.
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Everything that has fired so far.
    pub fn log(&self) -> &FiringLog {
        &self.log
    }
}
