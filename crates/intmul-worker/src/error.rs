use std::io;

use intmul_core::hex::HexError;
use intmul_core::model::Quadrant;
use intmul_input::InputError;
use thiserror::Error;

/// Every way a multiplication can abort. None of these are retried.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    /// Operand lines were rejected before any work started.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Digit arithmetic or splitting failed (invalid digit, odd length).
    #[error(transparent)]
    Operand(#[from] HexError),

    #[error("{context}: {source}")]
    Channel {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A delegated unit exited unsuccessfully or sent an unusable result.
    #[error("{quadrant} unit failed: {reason}")]
    ChildFailure { quadrant: Quadrant, reason: String },

    #[error("out of resources: {0}")]
    AllocationFailure(String),
}

impl WorkerError {
    /// Wrap an I/O failure on a unit channel.
    pub fn channel(context: impl Into<String>, source: io::Error) -> Self {
        let context = context.into();
        if source.kind() == io::ErrorKind::OutOfMemory {
            WorkerError::AllocationFailure(format!("{context}: {source}"))
        } else {
            WorkerError::Channel { context, source }
        }
    }

    pub fn child(quadrant: Quadrant, reason: impl Into<String>) -> Self {
        WorkerError::ChildFailure {
            quadrant,
            reason: reason.into(),
        }
    }

    /// Stable snake_case code, used in telemetry.
    pub fn code(&self) -> &'static str {
        match self {
            WorkerError::InvalidUsage(_) => "invalid_usage",
            WorkerError::Input(e) => e.code().map(|c| c.as_str()).unwrap_or("invalid_input"),
            WorkerError::Operand(HexError::OddLength(_)) => "odd_length",
            WorkerError::Operand(HexError::InvalidDigit(_)) => "invalid_digit",
            WorkerError::Operand(_) => "invalid_operand",
            WorkerError::Channel { .. } => "channel",
            WorkerError::ChildFailure { .. } => "child_failure",
            WorkerError::AllocationFailure(_) => "allocation_failure",
        }
    }
}
