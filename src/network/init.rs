//! Seeded uniform initialization for `nn::Linear` layers.
//!
//! Values are drawn from a caller-owned [`StdRng`] and copied into the
//! layer's variables, so two networks built from the same seed get the
//! same parameters without touching libtorch's global generator.

use rand::{distributions::Uniform, rngs::StdRng, Rng};
use tch::{nn, Tensor};

/// Bound for the output layer's weights and biases.
pub const OUTPUT_INIT_BOUND: f64 = 3e-3;

/// Uniform bound `1/√fan_in` for a hidden layer.
pub fn hidden_init(fan_in: usize) -> f64 {
    1.0 / (fan_in as f64).sqrt()
}

/// Overwrites the weight and bias of `layer` with draws from `[-bound, bound]`.
pub(crate) fn uniform_linear(layer: &mut nn::Linear, bound: f64, rng: &mut StdRng) {
    uniform_(&mut layer.ws, bound, rng);
    if let Some(bs) = layer.bs.as_mut() {
        uniform_(bs, bound, rng);
    }
}

fn uniform_(t: &mut Tensor, bound: f64, rng: &mut StdRng) {
    let bound = bound as f32;
    let dist = Uniform::new_inclusive(-bound, bound);
    let values: Vec<f32> = (0..t.numel()).map(|_| rng.sample(dist)).collect();
    let src = Tensor::from_slice(&values)
        .view(t.size().as_slice())
        .to_device(t.device());
    tch::no_grad(|| t.copy_(&src));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tch::{nn::Module, Device, Kind};

    fn max_abs(t: &Tensor) -> f64 {
        t.abs().max().double_value(&[])
    }

    #[test]
    fn hidden_init_is_inverse_sqrt_fan_in() {
        assert!((hidden_init(400) - 0.05).abs() < 1e-12);
        assert!((hidden_init(1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_linear_respects_bound() {
        let vs = nn::VarStore::new(Device::Cpu);
        let mut layer = nn::linear(vs.root() / "l", 50, 20, Default::default());
        let mut rng = StdRng::seed_from_u64(3);
        uniform_linear(&mut layer, OUTPUT_INIT_BOUND, &mut rng);

        assert!(max_abs(&layer.ws) <= OUTPUT_INIT_BOUND + 1e-9);
        assert!(max_abs(layer.bs.as_ref().unwrap()) <= OUTPUT_INIT_BOUND + 1e-9);
    }

    #[test]
    fn uniform_linear_writes_through_to_var_store() {
        let vs = nn::VarStore::new(Device::Cpu);
        let mut layer = nn::linear(vs.root() / "l", 4, 2, Default::default());
        let mut rng = StdRng::seed_from_u64(11);
        uniform_linear(&mut layer, 1e-4, &mut rng);

        let vars = vs.variables();
        assert!(max_abs(&vars["l.weight"]) <= 1e-4 + 1e-9);

        let x = Tensor::ones([1, 4], (Kind::Float, Device::Cpu));
        let y = layer.forward(&x);
        assert_eq!(y.size(), vec![1, 2]);
    }
}
