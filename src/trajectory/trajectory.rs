use std::ops::Index;

use tch::{Kind, Tensor};
use tracing::trace;

use super::column::Column;
use super::error::TrajectoryError;

/// Append-only columnar store for one rollout.
///
/// Every call to [`add`](Self::add) appends one row to each of the six
/// columns. A row is the whole batch for that timestep (e.g. `[n_envs, ..]`),
/// stored exactly as passed in. `score` accumulates the batch-mean reward
/// of every row.
///
/// There is no `clear`; build a fresh trajectory per rollout.
#[derive(Debug, Default)]
pub struct Trajectory {
    state: Vec<Tensor>,
    reward: Vec<Tensor>,
    prob: Vec<Tensor>,
    action: Vec<Tensor>,
    value: Vec<Tensor>,
    done: Vec<Tensor>,
    score: f64,
}

impl Trajectory {
    /// Creates a new empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one timestep.
    ///
    /// # Arguments
    ///
    /// * `states` - Batch of observations
    /// * `rewards` - Batch of rewards; its mean is added to the score
    /// * `probs` - Log-probabilities of the taken actions
    /// * `actions` - Taken actions
    /// * `values` - Critic estimates
    /// * `dones` - Episode termination flags
    pub fn add(
        &mut self,
        states: Tensor,
        rewards: Tensor,
        probs: Tensor,
        actions: Tensor,
        values: Tensor,
        dones: Tensor,
    ) {
        let mean_reward = rewards.mean(Kind::Double).double_value(&[]);
        self.score += mean_reward;

        self.state.push(states);
        self.reward.push(rewards);
        self.prob.push(probs);
        self.action.push(actions);
        self.value.push(values);
        self.done.push(dones);

        trace!(step = self.state.len(), mean_reward, score = self.score, "trajectory step");
    }

    /// Number of recorded timesteps.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Running sum of per-step mean rewards.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns every row of `column` in insertion order.
    pub fn column(&self, column: Column) -> &[Tensor] {
        match column {
            Column::State => &self.state,
            Column::Reward => &self.reward,
            Column::Prob => &self.prob,
            Column::Action => &self.action,
            Column::Value => &self.value,
            Column::Done => &self.done,
        }
    }

    /// Looks a column up by its key (`"state"`, `"reward"`, `"prob"`,
    /// `"action"`, `"value"` or `"done"`).
    pub fn get(&self, key: &str) -> Result<&[Tensor], TrajectoryError> {
        Ok(self.column(key.parse()?))
    }
}

impl Index<Column> for Trajectory {
    type Output = [Tensor];

    fn index(&self, column: Column) -> &Self::Output {
        self.column(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tch::Device;

    fn step(t: &mut Trajectory, rewards: &[f32]) {
        let n = rewards.len() as i64;
        t.add(
            Tensor::zeros([n, 3], (Kind::Float, Device::Cpu)),
            Tensor::from_slice(rewards),
            Tensor::zeros([n, 1], (Kind::Float, Device::Cpu)),
            Tensor::zeros([n, 2], (Kind::Float, Device::Cpu)),
            Tensor::zeros([n, 1], (Kind::Float, Device::Cpu)),
            Tensor::zeros([n], (Kind::Bool, Device::Cpu)),
        );
    }

    #[test]
    fn new_trajectory_is_empty() {
        let t = Trajectory::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.score(), 0.0);
        for column in Column::ALL {
            assert!(t[column].is_empty());
        }
    }

    #[test]
    fn add_grows_every_column() {
        let mut t = Trajectory::new();
        for _ in 0..5 {
            step(&mut t, &[1.0, 0.0]);
        }
        assert_eq!(t.len(), 5);
        for column in Column::ALL {
            assert_eq!(t.column(column).len(), 5, "column {column}");
        }
    }

    #[test]
    fn score_sums_batch_means() {
        let mut t = Trajectory::new();
        step(&mut t, &[1.0, 3.0]);
        step(&mut t, &[0.5, 0.5]);
        step(&mut t, &[-1.0, 0.0, 1.0, 2.0]);
        assert!((t.score() - (2.0 + 0.5 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn rows_are_kept_in_order() {
        let mut t = Trajectory::new();
        step(&mut t, &[1.0]);
        step(&mut t, &[2.0]);
        step(&mut t, &[3.0]);
        let rewards: Vec<f64> = t[Column::Reward]
            .iter()
            .map(|r| r.double_value(&[0]))
            .collect();
        assert_eq!(rewards, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn stored_rows_share_storage_with_inputs() {
        let mut t = Trajectory::new();
        let states = Tensor::randn([4, 3], (Kind::Float, Device::Cpu));
        let rewards = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0]);
        let probs = Tensor::randn([4, 1], (Kind::Float, Device::Cpu));
        let actions = Tensor::randn([4, 2], (Kind::Float, Device::Cpu));
        let values = Tensor::randn([4, 1], (Kind::Float, Device::Cpu));
        let dones = Tensor::zeros([4], (Kind::Bool, Device::Cpu));
        let ptrs = [
            states.data_ptr(),
            rewards.data_ptr(),
            probs.data_ptr(),
            actions.data_ptr(),
            values.data_ptr(),
            dones.data_ptr(),
        ];

        t.add(states, rewards, probs, actions, values, dones);

        for (column, ptr) in Column::ALL.into_iter().zip(ptrs) {
            assert_eq!(t[column][0].data_ptr(), ptr, "column {column}");
        }
    }

    #[test]
    fn get_by_key() {
        let mut t = Trajectory::new();
        step(&mut t, &[1.0, 1.0]);
        assert_eq!(t.get("reward").unwrap().len(), 1);
        assert_eq!(t.get("done").unwrap()[0].size(), vec![2]);
        assert_eq!(
            t.get("returns").err(),
            Some(TrajectoryError::UnknownColumn("returns".to_string()))
        );
    }
}
