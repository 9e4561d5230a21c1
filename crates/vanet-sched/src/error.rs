use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error("periodic cadence must be positive")]
    ZeroCadence,
}

pub type SchedResult<T> = Result<T, SchedError>;
