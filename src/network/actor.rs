//! Deterministic actor network producing bounded action means.

use rand::{rngs::StdRng, SeedableRng};
use tch::{nn, nn::Module, Device, Tensor};
use tracing::debug;

use super::body::ActorBody;
use super::config::NetworkConfig;
use super::error::NetworkError;
use super::init::{hidden_init, uniform_linear, OUTPUT_INIT_BOUND};

/// MLP actor network mapping states to action means in (-1, 1).
///
/// Architecture: `state_size → fc1 → fc2 → action_size` with ReLU hidden
/// activations and a tanh output.
#[derive(Debug)]
pub struct Actor {
    vs: nn::VarStore,
    fc1: nn::Linear,
    fc2: nn::Linear,
    fc3: nn::Linear,
    config: NetworkConfig,
}

impl Actor {
    /// Creates a new actor network with seeded parameters.
    ///
    /// # Arguments
    ///
    /// * `config` - Layer widths and initialization seed
    /// * `device` - Device holding the parameters
    pub fn new(config: &NetworkConfig, device: Device) -> Result<Self, NetworkError> {
        config.validate()?;
        let (fc1_units, fc2_units) = config.hidden;

        let vs = nn::VarStore::new(device);
        let p = &vs.root();
        let fc1 = nn::linear(
            p / "fc1",
            config.state_size as i64,
            fc1_units as i64,
            Default::default(),
        );
        let fc2 = nn::linear(p / "fc2", fc1_units as i64, fc2_units as i64, Default::default());
        let fc3 = nn::linear(
            p / "fc3",
            fc2_units as i64,
            config.action_size as i64,
            Default::default(),
        );

        let mut actor = Self {
            vs,
            fc1,
            fc2,
            fc3,
            config: *config,
        };
        actor.reset_parameters();
        debug!(
            state_size = config.state_size,
            action_size = config.action_size,
            seed = config.seed,
            "actor network created"
        );
        Ok(actor)
    }

    /// Re-draws every parameter from the configured seed.
    ///
    /// Hidden layers use `[-1/√fan_in, 1/√fan_in]`; the output layer uses
    /// `[-3e-3, 3e-3]` so initial means sit close to zero.
    pub fn reset_parameters(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let (fc1_units, _) = self.config.hidden;
        uniform_linear(&mut self.fc1, hidden_init(self.config.state_size), &mut rng);
        uniform_linear(&mut self.fc2, hidden_init(fc1_units), &mut rng);
        uniform_linear(&mut self.fc3, OUTPUT_INIT_BOUND, &mut rng);
        debug!(seed = self.config.seed, "actor parameters reset");
    }

    /// Returns the construction config.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns a mutable reference to the variable store for optimization.
    pub fn var_store_mut(&mut self) -> &mut nn::VarStore {
        &mut self.vs
    }

    /// Returns a reference to the variable store.
    pub fn var_store(&self) -> &nn::VarStore {
        &self.vs
    }
}

impl Module for Actor {
    fn forward(&self, states: &Tensor) -> Tensor {
        states
            .apply(&self.fc1)
            .relu()
            .apply(&self.fc2)
            .relu()
            .apply(&self.fc3)
            .tanh()
    }
}

impl ActorBody for Actor {
    fn action_mean(&self, states: &Tensor) -> Tensor {
        self.forward(states)
    }

    fn action_size(&self) -> usize {
        self.config.action_size
    }

    fn trainable_variables(&self) -> Vec<Tensor> {
        self.vs.trainable_variables()
    }
}
