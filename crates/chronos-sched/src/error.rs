/// Alias for `Result<T, SchedError>`.
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors reported by the scheduler and its queue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedError {
    /// A pop or peek was attempted on a schedule with nothing pending.
    #[error("the schedule is empty")]
    EmptyQueue,

    /// A command refused the parameters it was given and was not scheduled.
    #[error("command {name} rejected its parameters: [{}]", params.join(", "))]
    BindFailed {
        /// Name of the rejecting command.
        name: String,
        /// The parameters that were offered.
        params: Vec<String>,
    },
}
