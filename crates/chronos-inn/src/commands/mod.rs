//! The command catalogue and the factory that turns player input into
//! bound commands.

/// Patron and innkeeper commands raised by the game.
pub mod patron;
/// Commands typed by the player.
pub mod player;

use chronos_sched::{BoundCommand, Command};

use crate::error::{InnError, InnResult};
use crate::inn::Inn;

pub use patron::{CloseInn, PatronEnter, PatronLeave};
pub use player::{Look, Quit, Wait};

/// Verb synonyms for player commands.
const WAIT_VERBS: &[&str] = &["wait", "z", "rest"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// A player command kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// [`Wait`].
    Wait,
    /// [`Look`].
    Look,
    /// [`Quit`].
    Quit,
}

impl Verb {
    /// Every player verb, in help order.
    pub const ALL: [Verb; 3] = [Verb::Look, Verb::Wait, Verb::Quit];

    /// Resolve a typed word (case-insensitive) to a verb.
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        if WAIT_VERBS.contains(&word.as_str()) {
            Some(Self::Wait)
        } else if LOOK_VERBS.contains(&word.as_str()) {
            Some(Self::Look)
        } else if QUIT_VERBS.contains(&word.as_str()) {
            Some(Self::Quit)
        } else {
            None
        }
    }

    /// A fresh, unbound command of this kind.
    pub fn create(self) -> Box<dyn Command<Inn>> {
        match self {
            Self::Wait => Box::new(Wait::new()),
            Self::Look => Box::new(Look),
            Self::Quit => Box::new(Quit),
        }
    }

    /// Expected input format.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Wait => Wait::USAGE,
            Self::Look => Look::USAGE,
            Self::Quit => Quit::USAGE,
        }
    }
}

/// Build an unbound command from its verb, if the verb is known.
pub fn create_command(verb: &str) -> Option<Box<dyn Command<Inn>>> {
    Verb::parse(verb).map(Verb::create)
}

/// Parse one line of player input into a command ready to schedule.
pub fn parse_input(input: &str) -> InnResult<BoundCommand<Inn>> {
    let mut words = input.split_whitespace();
    let Some(first) = words.next() else {
        return Err(InnError::EmptyInput);
    };
    let verb = Verb::parse(first).ok_or_else(|| InnError::UnknownCommand(first.to_string()))?;
    let params: Vec<String> = words.map(str::to_string).collect();

    BoundCommand::bind(verb.create(), &params).map_err(|source| InnError::Usage {
        usage: verb.usage().to_string(),
        source,
    })
}

/// One help line per player command: usage and description.
pub fn help_lines() -> Vec<String> {
    Verb::ALL
        .iter()
        .map(|verb| {
            let keyword = verb.usage().split(' ').next().unwrap_or_default();
            format!("{keyword:<10} {}", verb.create().description())
        })
        .collect()
}
