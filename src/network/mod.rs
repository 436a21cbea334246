//! Feed-forward function approximators built on tch-rs (PyTorch bindings).
//!
//! [`Actor`] maps states to bounded action means, [`Critic`] maps states to
//! scalar values. Both own their own `VarStore` and initialize it from a
//! seeded local RNG.

pub mod actor;
pub mod body;
pub mod config;
pub mod critic;
pub mod error;
pub mod init;

pub use actor::Actor;
pub use body::{ActorBody, CriticBody};
pub use config::NetworkConfig;
pub use critic::Critic;
pub use error::NetworkError;
