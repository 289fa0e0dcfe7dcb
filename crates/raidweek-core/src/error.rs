//! Error types for raidweek-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unknown placeholder in template: {{{0}}}")]
    MissingPlaceholder(String),

    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("Unknown event key: {0}")]
    UnknownEvent(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
