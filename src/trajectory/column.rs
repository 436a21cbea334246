//! Names of the six trajectory columns.

use std::fmt;
use std::str::FromStr;

use super::error::TrajectoryError;

/// One of the fixed per-timestep columns of a [`Trajectory`](super::Trajectory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    State,
    Reward,
    /// Log-probability of the taken action.
    Prob,
    Action,
    Value,
    Done,
}

impl Column {
    /// All columns in storage order.
    pub const ALL: [Column; 6] = [
        Column::State,
        Column::Reward,
        Column::Prob,
        Column::Action,
        Column::Value,
        Column::Done,
    ];

    /// Lookup key of the column.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::State => "state",
            Column::Reward => "reward",
            Column::Prob => "prob",
            Column::Action => "action",
            Column::Value => "value",
            Column::Done => "done",
        }
    }
}

impl FromStr for Column {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TrajectoryError::UnknownColumn(s.to_string()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
