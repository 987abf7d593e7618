//! Discrete-event command scheduler for Chronos.
//!
//! Game actions are [`Command`]s: named, delayed, parameterised units of work.
//! A [`Scheduler`] keeps pending commands in a [`DeltaQueue`], where each entry
//! stores only its offset from the entry before it, and fires them in time
//! order against a caller-supplied world. Time is a logical [`GameClock`]
//! advanced by popping the queue; nothing here reads the wall clock or blocks.

/// Logical game clock.
pub mod clock;
/// The command contract and bound commands.
pub mod command;
/// Scheduler configuration.
pub mod config;
/// Context handed to a command while it executes.
pub mod context;
/// The time-ordered delta list.
pub mod delta_queue;
/// Error types for the scheduler crate.
pub mod error;
/// Record of executed commands.
pub mod log;
/// The scheduler and its run loop.
pub mod scheduler;

/// Re-export of [`clock::GameClock`].
pub use clock::GameClock;
/// Re-exports of the command contract.
pub use command::{BoundCommand, Command, Tick};
/// Re-exports of [`config::SchedConfig`] and [`config::TICKS_PER_HOUR`].
pub use config::{SchedConfig, TICKS_PER_HOUR};
/// Re-export of [`context::CommandContext`].
pub use context::CommandContext;
/// Re-export of [`delta_queue::DeltaQueue`].
pub use delta_queue::DeltaQueue;
/// Re-exports of [`error::SchedError`] and [`error::SchedResult`].
pub use error::{SchedError, SchedResult};
/// Re-exports of [`log::Firing`] and [`log::FiringLog`].
pub use log::{Firing, FiringLog};
/// Re-exports of the scheduler and its state types.
pub use scheduler::{Pending, RunSummary, Scheduler, SchedulerState, StopReason};
