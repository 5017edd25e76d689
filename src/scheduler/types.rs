use thiserror::Error;

/// Heures entre le minimum de température et le réveil.
pub const TEMPERATURE_MINIMUM_BEFORE_WAKE_HOURS: i64 = 2;
/// Heures entre le coucher suggéré et le réveil.
pub const BEDTIME_BEFORE_WAKE_HOURS: i64 = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SchedError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        SchedError::InvalidInput(msg.into())
    }
}
