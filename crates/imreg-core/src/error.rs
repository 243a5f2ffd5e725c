//! Error types

use thiserror::Error;

/// Pipeline validation error.
///
/// The only fallible path of `process`; every data anomaly inside the
/// pipeline degrades to exclusion-with-counting instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "native", derive(uniffi::Error))]
pub enum PipelineError {
    #[error("similarity threshold must be within 0-100, got {value}")]
    InvalidThreshold { value: u8 },
}

/// Report projection error, returned to the rendering collaborator
/// instead of a bare boolean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "native", derive(uniffi::Error))]
pub enum ReportError {
    #[error("no result records to render")]
    EmptyResultSet,
}
