//! Commands typed by the player.

use chronos_sched::{Command, CommandContext, TICKS_PER_HOUR, Tick};

use crate::inn::Inn;

const TICKS_PER_MINUTE: Tick = 60;

/// Let time pass: `WAIT`, `WAIT N M[inutes]` (1-59) or `WAIT N H[ours]` (0-24).
#[derive(Debug, Clone, Default)]
pub struct Wait {
    delay: Tick,
    in_hours: bool,
}

impl Wait {
    /// Expected input format.
    pub const USAGE: &'static str = "WAIT [N M[inutes]] | [N H[ours]], where 1 <= N <= 59 minutes or 0 <= N <= 24 hours";

    /// A wait with no duration yet; binding sets it.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command<Inn> for Wait {
    fn name(&self) -> &str {
        "Wait"
    }

    fn delay(&self) -> Tick {
        self.delay
    }

    fn duration(&self) -> Tick {
        0
    }

    fn description(&self) -> &str {
        "Do nothing for the given amount of time."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        let (count, unit) = match params {
            [] => {
                self.delay = 0;
                self.in_hours = false;
                return true;
            }
            [count, unit] => (count, unit.to_lowercase()),
            _ => return false,
        };
        let Ok(count) = count.parse::<Tick>() else {
            return false;
        };
        match unit.as_str() {
            "h" | "hr" | "hour" | "hours" if count <= 24 => {
                self.delay = count * TICKS_PER_HOUR;
                self.in_hours = true;
                true
            }
            "m" | "min" | "minute" | "minutes" if (1..60).contains(&count) => {
                self.delay = count * TICKS_PER_MINUTE;
                self.in_hours = false;
                true
            }
            _ => false,
        }
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        let message = if self.in_hours {
            format!("You wait {} hour(s).", self.delay / TICKS_PER_HOUR)
        } else {
            format!("You wait {} minute(s).", self.delay / TICKS_PER_MINUTE)
        };
        ctx.world.notice(message);
        true
    }

    fn summary(&self) -> String {
        format!("wait {}s", self.delay)
    }

    fn is_user_input(&self) -> bool {
        true
    }
}

/// Look around the common room.
#[derive(Debug, Clone, Default)]
pub struct Look;

impl Look {
    /// Expected input format.
    pub const USAGE: &'static str = "LOOK";
}

impl Command<Inn> for Look {
    fn name(&self) -> &str {
        "Look"
    }

    fn delay(&self) -> Tick {
        0
    }

    fn duration(&self) -> Tick {
        0
    }

    fn description(&self) -> &str {
        "See who is in the common room."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        params.is_empty()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        let message = if ctx.world.patrons().is_empty() {
            format!("{} is empty.", ctx.world.name())
        } else {
            format!("In {}: {}.", ctx.world.name(), ctx.world.patrons().join(", "))
        };
        ctx.world.notice(message);
        true
    }

    fn is_user_input(&self) -> bool {
        true
    }
}

/// End the session.
#[derive(Debug, Clone, Default)]
pub struct Quit;

impl Quit {
    /// Expected input format.
    pub const USAGE: &'static str = "QUIT";
}

impl Command<Inn> for Quit {
    fn name(&self) -> &str {
        "Quit"
    }

    fn delay(&self) -> Tick {
        0
    }

    fn duration(&self) -> Tick {
        0
    }

    fn description(&self) -> &str {
        "End the program."
    }

    fn bind_parameters(&mut self, params: &[String]) -> bool {
        params.is_empty()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_, Inn>) -> bool {
        ctx.world.notice("You head home for the night.");
        true
    }

    fn is_terminal(&self) -> bool {
        true
    }

    fn is_user_input(&self) -> bool {
        true
    }
}
