//! Error types for the engine

use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while loading a schedule, before any simulation runs
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// IO error reading the schedule file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer meaningful lines than the format requires
    #[error("schedule is missing the {0} line")]
    MissingField(&'static str),

    /// A line failed unsigned integer parsing
    #[error("invalid integer {text:?} on line {line}")]
    InvalidInteger { line: usize, text: String },

    /// A capacity of zero can never admit a user
    #[error("server capacity must be at least 1")]
    ZeroCapacity,
}
