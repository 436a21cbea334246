//! Construction parameters shared by the actor and critic networks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::NetworkError;

/// Shape and seed of a two-hidden-layer feed-forward network.
///
/// The same config can build both an [`Actor`](super::Actor) and a
/// [`Critic`](super::Critic); the critic ignores `action_size` and always
/// has a single output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkConfig {
    /// Dimension of each state.
    pub state_size: usize,
    /// Dimension of each action.
    pub action_size: usize,
    /// Seed for parameter initialization.
    pub seed: u64,
    /// Widths of the first and second hidden layers.
    pub hidden: (usize, usize),
}

impl NetworkConfig {
    /// Default width of the first hidden layer.
    pub const DEFAULT_FC1_UNITS: usize = 400;
    /// Default width of the second hidden layer.
    pub const DEFAULT_FC2_UNITS: usize = 300;

    /// Creates a config with the default 400/300 hidden widths.
    pub fn new(state_size: usize, action_size: usize, seed: u64) -> Self {
        Self {
            state_size,
            action_size,
            seed,
            hidden: (Self::DEFAULT_FC1_UNITS, Self::DEFAULT_FC2_UNITS),
        }
    }

    /// Overrides the hidden layer widths.
    pub fn with_hidden(mut self, fc1_units: usize, fc2_units: usize) -> Self {
        self.hidden = (fc1_units, fc2_units);
        self
    }

    /// Checks that every layer has at least one unit.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let dims = [
            ("state_size", self.state_size),
            ("action_size", self.action_size),
            ("fc1_units", self.hidden.0),
            ("fc2_units", self.hidden.1),
        ];
        match dims.iter().find(|(_, d)| *d == 0) {
            Some((name, _)) => Err(NetworkError::ZeroDimension(name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_widths() {
        let cfg = NetworkConfig::new(33, 4, 0);
        assert_eq!(cfg.hidden, (400, 300));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_hidden_overrides_widths() {
        let cfg = NetworkConfig::new(33, 4, 0).with_hidden(64, 32);
        assert_eq!(cfg.hidden, (64, 32));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let cfg = NetworkConfig::new(0, 4, 0);
        assert_eq!(cfg.validate(), Err(NetworkError::ZeroDimension("state_size")));

        let cfg = NetworkConfig::new(3, 4, 0).with_hidden(16, 0);
        assert_eq!(cfg.validate(), Err(NetworkError::ZeroDimension("fc2_units")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let cfg = NetworkConfig::new(24, 2, 7).with_hidden(128, 64);
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: NetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, restored);
    }
}
