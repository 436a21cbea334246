use thiserror::Error;

use crate::network::NetworkError;

/// Errors raised by [`GaussianPolicy`](super::GaussianPolicy).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Action size mismatch: expected {expected}, found {found}")]
    ActionSizeMismatch { expected: usize, found: usize },

    #[error("Expected {name} of rank {expected}, found rank {found}")]
    RankMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}
