//! ppo-core - Gaussian actor-critic policy and rollout trajectory for PPO.
//!
//! The crate covers the model side of a continuous-control PPO agent:
//! seeded actor/critic networks, a diagonal-Gaussian policy that samples or
//! re-scores actions, and the per-rollout trajectory buffer. Optimizers,
//! losses and environment loops live with the caller.

pub mod network;
pub mod policy;
pub mod trajectory;

pub use network::{Actor, ActorBody, Critic, CriticBody, NetworkConfig, NetworkError};
pub use policy::{DiagonalGaussian, GaussianPolicy, PolicyError, PolicyOutput, ENTROPY_SCALE};
pub use trajectory::{Column, Trajectory, TrajectoryError};
