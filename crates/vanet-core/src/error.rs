//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `VanetError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{FlowId, MoverId};

/// The top-level error type for `vanet-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VanetError {
    #[error("flow {0} not found")]
    FlowNotFound(FlowId),

    #[error("mover {0} not found")]
    MoverNotFound(MoverId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `vanet-*` crates.
pub type VanetResult<T> = Result<T, VanetError>;
