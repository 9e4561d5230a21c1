//! Error types for vanet-monitor.

use thiserror::Error;

/// Errors from opening or writing the metrics sink.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("sampler schedule error: {0}")]
    Sched(#[from] vanet_sched::SchedError),
}

/// Alias for `Result<T, MonitorError>`.
pub type MonitorResult<T> = Result<T, MonitorError>;
