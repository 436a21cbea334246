//! State-value critic network.

use rand::{rngs::StdRng, SeedableRng};
use tch::{nn, nn::Module, Device, Tensor};
use tracing::debug;

use super::body::CriticBody;
use super::config::NetworkConfig;
use super::error::NetworkError;
use super::init::{hidden_init, uniform_linear, OUTPUT_INIT_BOUND};

/// MLP critic network.
///
/// Architecture: `state_size → fc1 → fc2 → 1` with ReLU activations and an
/// unbounded linear output. `config.action_size` is not used.
#[derive(Debug)]
pub struct Critic {
    vs: nn::VarStore,
    fc1: nn::Linear,
    fc2: nn::Linear,
    fc3: nn::Linear,
    config: NetworkConfig,
}

impl Critic {
    /// Creates a new critic network with seeded parameters.
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
        let fc3 = nn::linear(p / "fc3", fc2_units as i64, 1, Default::default());

        let mut critic = Self {
            vs,
            fc1,
            fc2,
            fc3,
            config: *config,
        };
        critic.reset_parameters();
        debug!(
            state_size = config.state_size,
            seed = config.seed,
            "critic network created"
        );
        Ok(critic)
    }

    /// Re-draws every parameter from the configured seed.
    pub fn reset_parameters(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let (fc1_units, _) = self.config.hidden;
        uniform_linear(&mut self.fc1, hidden_init(self.config.state_size), &mut rng);
        uniform_linear(&mut self.fc2, hidden_init(fc1_units), &mut rng);
        uniform_linear(&mut self.fc3, OUTPUT_INIT_BOUND, &mut rng);
        debug!(seed = self.config.seed, "critic parameters reset");
    }

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

impl Module for Critic {
    fn forward(&self, states: &Tensor) -> Tensor {
        states
            .apply(&self.fc1)
            .relu()
            .apply(&self.fc2)
            .relu()
            .apply(&self.fc3)
    }
}

impl CriticBody for Critic {
    fn value(&self, states: &Tensor) -> Tensor {
        self.forward(states)
    }

    fn trainable_variables(&self) -> Vec<Tensor> {
        self.vs.trainable_variables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tch::Kind;

    fn small_config(seed: u64) -> NetworkConfig {
        NetworkConfig::new(6, 2, seed).with_hidden(24, 12)
    }

    #[test]
    fn critic_forward_shape() {
        let critic = Critic::new(&small_config(0), Device::Cpu).unwrap();
        let states = Tensor::randn([4, 6], (Kind::Float, Device::Cpu));
        assert_eq!(critic.forward(&states).size(), vec![4, 1]);

        let sequences = Tensor::randn([4, 3, 6], (Kind::Float, Device::Cpu));
        assert_eq!(critic.value(&sequences).size(), vec![4, 3, 1]);
    }

    #[test]
    fn critic_values_are_finite() {
        let critic = Critic::new(&small_config(9), Device::Cpu).unwrap();
        let states = Tensor::randn([32, 6], (Kind::Float, Device::Cpu)) * 100.0;
        let values = critic.forward(&states);
        assert_eq!(values.size(), vec![32, 1]);
        assert!(values.abs().max().double_value(&[]).is_finite());
    }

    #[test]
    fn output_layer_starts_near_zero() {
        let critic = Critic::new(&small_config(1), Device::Cpu).unwrap();
        let vars = critic.var_store().variables();
        assert_eq!(vars["fc3.weight"].size(), vec![1, 12]);
        assert!(vars["fc3.weight"].abs().max().double_value(&[]) <= OUTPUT_INIT_BOUND + 1e-9);
        assert!(vars["fc1.weight"].abs().max().double_value(&[]) <= hidden_init(6) + 1e-6);
    }

    #[test]
    fn same_seed_same_values() {
        let a = Critic::new(&small_config(17), Device::Cpu).unwrap();
        let b = Critic::new(&small_config(17), Device::Cpu).unwrap();
        let states = Tensor::randn([8, 6], (Kind::Float, Device::Cpu));
        assert!(a.forward(&states).equal(&b.forward(&states)));
    }

    #[test]
    fn action_size_is_ignored() {
        let cfg = NetworkConfig::new(6, 5, 0).with_hidden(8, 8);
        let critic = Critic::new(&cfg, Device::Cpu).unwrap();
        let states = Tensor::zeros([2, 6], (Kind::Float, Device::Cpu));
        assert_eq!(critic.forward(&states).size(), vec![2, 1]);
    }
}
