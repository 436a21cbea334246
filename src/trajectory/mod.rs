//! Rollout storage consumed by the (external) PPO update.

pub mod column;
pub mod error;
pub mod trajectory;

pub use column::Column;
pub use error::TrajectoryError;
pub use trajectory::Trajectory;
