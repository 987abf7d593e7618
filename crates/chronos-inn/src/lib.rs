//! The inn side of Chronos.
//!
//! Provides the world the scheduler's commands act on (an inn's common room),
//! the roster of patrons who visit it, the command catalogue (patron arrivals
//! and departures, closing time, and the player's own commands), a factory
//! that parses player input into bound commands, and the loader that fills a
//! scheduler with an evening's traffic.

pub mod commands;
pub mod error;
pub mod evening;
pub mod inn;
pub mod roster;

pub use commands::{create_command, parse_input};
pub use error::{InnError, InnResult};
pub use evening::{EveningConfig, load_evening};
pub use inn::Inn;
pub use roster::{Patron, PatronRoster};
