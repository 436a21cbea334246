//! Diagonal Gaussian over continuous actions.
//!
//! Each action dimension is an independent Normal. `log_prob` and `entropy`
//! return per-dimension values; summing over the action axis is left to
//! the caller.

use tch::Tensor;

/// `0.5 * ln(2π)`.
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Normal distribution with location `mean` and scale `std`, broadcast
/// over the batch.
#[derive(Debug)]
pub struct DiagonalGaussian {
    mean: Tensor,
    std: Tensor,
}

impl DiagonalGaussian {
    /// Creates a distribution from a mean `[.., A]` and a scale broadcastable to it.
    pub fn new(mean: Tensor, std: Tensor) -> Self {
        Self { mean, std }
    }

    pub fn mean(&self) -> &Tensor {
        &self.mean
    }

    pub fn std(&self) -> &Tensor {
        &self.std
    }

    /// Draws one action per row. The draw is detached from the graph.
    pub fn sample(&self) -> Tensor {
        tch::no_grad(|| &self.mean + &self.std * self.mean.randn_like())
    }

    /// Per-dimension log-density of `actions`.
    pub fn log_prob(&self, actions: &Tensor) -> Tensor {
        -0.5 * (actions - &self.mean).pow_tensor_scalar(2.0) / self.std.pow_tensor_scalar(2.0)
            - self.std.log()
            - LN_SQRT_2PI
    }

    /// Per-dimension differential entropy, shaped like the mean.
    pub fn entropy(&self) -> Tensor {
        (self.std.log() + (0.5 + LN_SQRT_2PI)).expand_as(&self.mean)
    }
}
