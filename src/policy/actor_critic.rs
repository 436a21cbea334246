//! Actor-critic policy with a learned, state-independent standard deviation.

use tch::{nn, Device, Kind, Tensor};
use tracing::debug;

use super::error::PolicyError;
use super::gaussian::DiagonalGaussian;
use crate::network::{ActorBody, CriticBody, NetworkError};

/// Fixed divisor applied to the summed entropy.
///
/// Independent of `action_size`: a 2-D and a 6-D policy both divide by 4.
/// Whether `action_size` was the intended divisor is unresolved; the literal
/// value is kept so entropy bonuses stay on the same scale.
pub const ENTROPY_SCALE: f64 = 4.0;

/// Result of one policy evaluation.
///
/// Shapes for a batch of `B` states (or `B × T` in evaluation mode):
///
/// | field      | sampling  | given actions |
/// |------------|-----------|---------------|
/// | `actions`  | `[B, A]`  | `[B, T, A]`   |
/// | `log_prob` | `[B, 1]`  | `[B, T, 1]`   |
/// | `entropy`  | `[B]`     | `[B, T]`      |
/// | `value`    | `[B, 1]`  | `[B, T, 1]`   |
#[derive(Debug)]
pub struct PolicyOutput {
    pub actions: Tensor,
    pub log_prob: Tensor,
    pub entropy: Tensor,
    pub value: Tensor,
}

/// Gaussian actor-critic policy.
///
/// The actor supplies the mean of a diagonal Normal, the critic supplies a
/// value estimate, and a trainable `std` vector of shape `[1, action_size]`
/// (initialized to ones) supplies the scale for every state.
///
/// `std` is assumed positive; nothing here clamps it.
pub struct GaussianPolicy<A, C> {
    vs: nn::VarStore,
    std: Tensor,
    actor: A,
    critic: C,
    action_size: usize,
}

impl<A: ActorBody, C: CriticBody> GaussianPolicy<A, C> {
    /// Creates a new policy.
    ///
    /// # Arguments
    ///
    /// * `action_size` - Dimension of each action; must match the actor's output
    /// * `actor` - Mean approximator
    /// * `critic` - Value approximator
    /// * `device` - Device holding the `std` parameter
    pub fn new(
        action_size: usize,
        actor: A,
        critic: C,
        device: Device,
    ) -> Result<Self, PolicyError> {
        if action_size == 0 {
            return Err(NetworkError::ZeroDimension("action_size").into());
        }
        if actor.action_size() != action_size {
            return Err(PolicyError::ActionSizeMismatch {
                expected: action_size,
                found: actor.action_size(),
            });
        }

        let vs = nn::VarStore::new(device);
        let std = vs.root().ones("std", &[1, action_size as i64]);
        debug!(action_size, "gaussian policy created");

        Ok(Self {
            vs,
            std,
            actor,
            critic,
            action_size,
        })
    }

    /// Samples one action per state and scores it.
    ///
    /// `states` must be `[B, state_size]`. Log-probabilities and entropies
    /// are summed over the action axis (axis 1).
    pub fn sample_and_evaluate(&self, states: &Tensor) -> Result<PolicyOutput, PolicyError> {
        check_rank("states", states, 2)?;
        let (dist, value) = self.heads(states);
        let actions = dist.sample();
        Ok(score(&dist, actions, value))
    }

    /// Scores previously taken actions under the current parameters.
    ///
    /// `states` must be `[B, T, state_size]` and `actions` `[B, T, action_size]`.
    /// Reductions run over axis 2. The returned `actions` shares storage with
    /// the input.
    pub fn evaluate_given_actions(
        &self,
        states: &Tensor,
        actions: &Tensor,
    ) -> Result<PolicyOutput, PolicyError> {
        check_rank("states", states, 3)?;
        check_rank("actions", actions, 3)?;
        let found = actions.size()[2] as usize;
        if found != self.action_size {
            return Err(PolicyError::ActionSizeMismatch {
                expected: self.action_size,
                found,
            });
        }

        let (dist, value) = self.heads(states);
        Ok(score(&dist, actions.shallow_clone(), value))
    }

    /// Samples when `actions` is `None`, otherwise scores the given actions.
    pub fn evaluate(
        &self,
        states: &Tensor,
        actions: Option<&Tensor>,
    ) -> Result<PolicyOutput, PolicyError> {
        match actions {
            None => self.sample_and_evaluate(states),
            Some(actions) => self.evaluate_given_actions(states, actions),
        }
    }

    /// Builds the action distribution for `states` without touching the critic.
    pub fn distribution(&self, states: &Tensor) -> DiagonalGaussian {
        DiagonalGaussian::new(self.actor.action_mean(states), self.std.shallow_clone())
    }

    fn heads(&self, states: &Tensor) -> (DiagonalGaussian, Tensor) {
        (self.distribution(states), self.critic.value(states))
    }

    /// Actor, critic and `std` parameters, for the external optimizer.
    pub fn trainable_variables(&self) -> Vec<Tensor> {
        let mut vars = self.actor.trainable_variables();
        vars.extend(self.critic.trainable_variables());
        vars.extend(self.vs.trainable_variables());
        vars
    }

    pub fn std(&self) -> &Tensor {
        &self.std
    }

    pub fn action_size(&self) -> usize {
        self.action_size
    }

    pub fn actor(&self) -> &A {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut A {
        &mut self.actor
    }

    pub fn critic(&self) -> &C {
        &self.critic
    }

    pub fn critic_mut(&mut self) -> &mut C {
        &mut self.critic
    }

    /// Returns the variable store holding `std`.
    pub fn var_store(&self) -> &nn::VarStore {
        &self.vs
    }

    /// Returns a mutable reference to the variable store holding `std`.
    pub fn var_store_mut(&mut self) -> &mut nn::VarStore {
        &mut self.vs
    }
}

// Ranks are fixed per mode, so the action axis is always the last one.
fn score(dist: &DiagonalGaussian, actions: Tensor, value: Tensor) -> PolicyOutput {
    let log_prob = dist
        .log_prob(&actions)
        .sum_dim_intlist([-1].as_slice(), true, Kind::Float);
    let entropy = dist
        .entropy()
        .sum_dim_intlist([-1].as_slice(), false, Kind::Float)
        / ENTROPY_SCALE;
    PolicyOutput {
        actions,
        log_prob,
        entropy,
        value,
    }
}

fn check_rank(name: &'static str, t: &Tensor, expected: usize) -> Result<(), PolicyError> {
    let found = t.dim();
    if found == expected {
        Ok(())
    } else {
        Err(PolicyError::RankMismatch {
            name,
            expected,
            found,
        })
    }
}
