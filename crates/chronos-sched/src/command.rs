use std::fmt;

use crate::context::CommandContext;
use crate::error::{SchedError, SchedResult};

/// One unit of simulated time. The game treats a tick as one second.
pub type Tick = u64;

/// A named, delayed game action.
///
/// Implementations validate and store their parameters in
/// [`bind_parameters`](Command::bind_parameters) and perform their world
/// mutation in [`execute`](Command::execute). The scheduler only ever sees a
/// command after binding has succeeded, by way of [`BoundCommand`].
pub trait Command<W>: fmt::Debug {
    /// Identifier of this command kind.
    fn name(&self) -> &str;

    /// Ticks between scheduling and firing.
    fn delay(&self) -> Tick;

    /// Ticks the action stays in progress once it fires.
    fn duration(&self) -> Tick;

    /// One-line help text.
    fn description(&self) -> &str {
        ""
    }

    /// Validate and store the parameters. Returns `false` to reject them.
    fn bind_parameters(&mut self, params: &[String]) -> bool;

    /// Perform the action. The result is informational; a failed command is
    /// not retried.
    fn execute(&mut self, ctx: &mut CommandContext<'_, W>) -> bool;

    /// Short human-readable account of this instance, used in the firing log.
    fn summary(&self) -> String {
        self.name().to_string()
    }

    /// Executing this command stops the run loop.
    fn is_terminal(&self) -> bool {
        false
    }

    /// This command was typed by the player rather than raised by the game.
    fn is_user_input(&self) -> bool {
        false
    }
}

/// A command whose parameters have been accepted. Only bound commands can be
/// scheduled.
pub struct BoundCommand<W> {
    command: Box<dyn Command<W>>,
    params: Vec<String>,
}

impl<W> BoundCommand<W> {
    /// Bind `params` to `command`. A rejected command is dropped.
    pub fn bind(mut command: Box<dyn Command<W>>, params: &[String]) -> SchedResult<Self> {
        if command.bind_parameters(params) {
            Ok(Self {
                command,
                params: params.to_vec(),
            })
        } else {
            Err(SchedError::BindFailed {
                name: command.name().to_string(),
                params: params.to_vec(),
            })
        }
    }

    /// Bind an empty parameter list.
    pub fn parameterless(command: Box<dyn Command<W>>) -> SchedResult<Self> {
        Self::bind(command, &[])
    }

    /// The parameters the command accepted.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Borrow the wrapped command.
    pub fn command(&self) -> &dyn Command<W> {
        self.command.as_ref()
    }

    pub(crate) fn command_mut(&mut self) -> &mut dyn Command<W> {
        self.command.as_mut()
    }
}

impl<W> fmt::Debug for BoundCommand<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCommand")
            .field("command", &self.command)
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Knock {
        times: usize,
    }

    impl Command<()> for Knock {
        fn name(&self) -> &str {
            "knock"
        }
        fn delay(&self) -> Tick {
            2
        }
        fn duration(&self) -> Tick {
            1
        }
        fn bind_parameters(&mut self, params: &[String]) -> bool {
            match params {
                [] => true,
                [n] => match n.parse() {
                    Ok(times) => {
                        self.times = times;
                        true
                    }
                    Err(_) => false,
                },
                _ => false,
            }
        }
        fn execute(&mut self, _ctx: &mut CommandContext<'_, ()>) -> bool {
            true
        }
    }

    #[test]
    fn bind_accepts_valid_params() {
        let bound = BoundCommand::bind(Box::new(Knock { times: 1 }), &["3".to_string()]).unwrap();
        assert_eq!(bound.params(), ["3".to_string()]);
        assert_eq!(bound.command().name(), "knock");
        assert_eq!(bound.command().delay(), 2);
        assert_eq!(bound.command().duration(), 1);
    }

    #[test]
    fn bind_rejects_invalid_params() {
        let err = BoundCommand::bind(Box::new(Knock { times: 1 }), &["x".to_string()]).unwrap_err();
        assert_eq!(
            err,
            SchedError::BindFailed {
                name: "knock".into(),
                params: vec!["x".into()],
            }
        );
        assert_eq!(err.to_string(), "command knock rejected its parameters: [x]");
    }

    #[test]
    fn parameterless_binds_empty_list() {
        let bound = BoundCommand::parameterless(Box::new(Knock { times: 1 })).unwrap();
        assert!(bound.params().is_empty());
        assert!(!bound.command().is_terminal());
        assert!(!bound.command().is_user_input());
        assert_eq!(bound.command().summary(), "knock");
    }
}
