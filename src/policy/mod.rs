//! Stochastic Gaussian policy over continuous actions.
//!
//! [`GaussianPolicy`] composes any [`ActorBody`](crate::network::ActorBody)
//! and [`CriticBody`](crate::network::CriticBody) with a learned scale
//! vector. It has two evaluation modes:
//!
//! - [`GaussianPolicy::sample_and_evaluate`] for rollout collection, and
//! - [`GaussianPolicy::evaluate_given_actions`] for re-scoring stored
//!   actions when forming the PPO ratio.

pub mod actor_critic;
pub mod error;
pub mod gaussian;


pub use actor_critic::{GaussianPolicy, PolicyOutput, ENTROPY_SCALE};
pub use error::PolicyError;
pub use gaussian::DiagonalGaussian;
