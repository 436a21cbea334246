//! Capability traits the policy composes over.
//!
//! [`GaussianPolicy`](crate::policy::GaussianPolicy) only needs "states in,
//! action means out" and "states in, values out"; any approximator that
//! provides those can stand in for [`Actor`](super::Actor) and
//! [`Critic`](super::Critic).

use tch::Tensor;

/// Maps a batch of states `[.., state_size]` to action means `[.., action_size]`.
pub trait ActorBody {
    /// Computes the action mean for every state in the batch.
    fn action_mean(&self, states: &Tensor) -> Tensor;

    /// Width of the produced action vectors.
    fn action_size(&self) -> usize;

    /// Parameters the external optimizer should update.
    fn trainable_variables(&self) -> Vec<Tensor> {
        Vec::new()
    }
}

/// Maps a batch of states `[.., state_size]` to values `[.., 1]`.
pub trait CriticBody {
    /// Computes the value estimate for every state in the batch.
    fn value(&self, states: &Tensor) -> Tensor;

    /// Parameters the external optimizer should update.
    fn trainable_variables(&self) -> Vec<Tensor> {
        Vec::new()
    }
}

impl<T: ActorBody + ?Sized> ActorBody for Box<T> {
    fn action_mean(&self, states: &Tensor) -> Tensor {
        (**self).action_mean(states)
    }

    fn action_size(&self) -> usize {
        (**self).action_size()
    }

    fn trainable_variables(&self) -> Vec<Tensor> {
        (**self).trainable_variables()
    }
}

impl<T: CriticBody + ?Sized> CriticBody for Box<T> {
    fn value(&self, states: &Tensor) -> Tensor {
        (**self).value(states)
    }

    fn trainable_variables(&self) -> Vec<Tensor> {
        (**self).trainable_variables()
    }
}
