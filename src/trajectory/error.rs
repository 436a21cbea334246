use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("Unknown trajectory column: {0}")]
    UnknownColumn(String),
}
