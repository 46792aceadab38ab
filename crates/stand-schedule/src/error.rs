use stand_core::Minute;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("event for minute {minute} scheduled after minute {floor} was already drained")]
    EventInPast { minute: Minute, floor: Minute },

    #[error("arrivals parse error: {0}")]
    Parse(String),

    #[error("generator configuration error: {0}")]
    Generator(String),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
