use thiserror::Error;
use vanet_monitor::MonitorError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("metrics monitor error: {0}")]
    Monitor(#[from] MonitorError),
}

pub type SimResult<T> = Result<T, SimError>;
