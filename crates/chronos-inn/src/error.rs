//! Error types for the inn.

use chronos_sched::SchedError;
use thiserror::Error;

/// Result type for inn operations.
pub type InnResult<T> = Result<T, InnError>;

/// Errors that can occur while building or scheduling inn commands.
#[derive(Debug, Error)]
pub enum InnError {
    /// Player input was blank.
    #[error("no command given")]
    EmptyInput,

    /// The verb does not name a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command was found but refused its parameters.
    #[error("usage: {usage}")]
    Usage {
        /// Expected format of the command.
        usage: String,
        /// The underlying binding failure.
        #[source]
        source: SchedError,
    },

    /// The patron roster could not be parsed.
    #[error("invalid patron roster: {0}")]
    Roster(#[from] serde_json::Error),

    /// The patron roster has no patrons.
    #[error("patron roster is empty")]
    EmptyRoster,

    /// Scheduler error.
    #[error("{0}")]
    Sched(#[from] SchedError),
}
