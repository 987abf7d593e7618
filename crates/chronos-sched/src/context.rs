use tracing::trace;

use crate::command::{BoundCommand, Tick};
use crate::delta_queue::DeltaQueue;

/// What a command sees while it executes: the world it mutates, the current
/// game time, and a handle for scheduling follow-up commands into the queue
/// that is being drained.
pub struct CommandContext<'a, W> {
    /// The world the command acts on.
    pub world: &'a mut W,
    now: Tick,
    queue: &'a mut DeltaQueue<BoundCommand<W>>,
}

impl<'a, W> CommandContext<'a, W> {
    pub(crate) fn new(
        world: &'a mut W,
        now: Tick,
        queue: &'a mut DeltaQueue<BoundCommand<W>>,
    ) -> Self {
        Self { world, now, queue }
    }

    /// Schedule `command` to fire its delay after the current time.
    pub fn schedule(&mut self, command: BoundCommand<W>) {
        let delay = command.command().delay();
        trace!(name = command.command().name(), delay, now = self.now, "rescheduled from execute");
        self.queue.insert(delay, command);
    }

    /// Game time at which the executing command fired.
    pub fn now(&self) -> Tick {
        self.now
    }
}
