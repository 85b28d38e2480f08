//! Failure type surfaced by the conversion entry points

use std::fmt;
use thiserror::Error;

/// Stage of the conversion that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Read => f.write_str("failed to read workout table"),
            Phase::Write => f.write_str("failed to write workout program"),
        }
    }
}

/// Any fault while reading rows, matching columns or writing output.
///
/// The underlying cause is kept as the error source.
#[derive(Debug, Error)]
#[error("{phase}")]
pub struct TransformationFailure {
    phase: Phase,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransformationFailure {
    pub fn new(phase: Phase, source: impl Into<anyhow::Error>) -> Self {
        let source: anyhow::Error = source.into();
        Self {
            phase,
            source: source.into(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
