// Demonstration: collect a short synthetic rollout with a fresh policy.
//
// Build/run from this repo root:
//   RUST_LOG=debug cargo run --example rollout -- --steps 20 --envs 4 --seed 7

use std::env;

use ppo_core::{Actor, Column, Critic, GaussianPolicy, NetworkConfig, Trajectory};
use tch::{Device, Kind, Tensor};
use tracing::info;
use tracing_subscriber::EnvFilter;

const STATE_SIZE: usize = 8;
const ACTION_SIZE: usize = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let steps: usize = arg_value(&args, "--steps")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let n_envs: i64 = arg_value(&args, "--envs")
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = NetworkConfig::new(STATE_SIZE, ACTION_SIZE, seed);
    let actor = Actor::new(&config, Device::Cpu)?;
    let critic = Critic::new(&config, Device::Cpu)?;
    let policy = GaussianPolicy::new(ACTION_SIZE, actor, critic, Device::Cpu)?;

    tch::manual_seed(seed as i64);
    let mut trajectory = Trajectory::new();
    let mut states = Tensor::randn([n_envs, STATE_SIZE as i64], (Kind::Float, Device::Cpu));

    for _ in 0..steps {
        let out = tch::no_grad(|| policy.sample_and_evaluate(&states))?;

        // Toy dynamics: reward actions that point toward the first two state features.
        let target = states.narrow(1, 0, ACTION_SIZE as i64).tanh();
        let rewards = -(&out.actions - &target)
            .pow_tensor_scalar(2.0)
            .sum_dim_intlist([1].as_slice(), false, Kind::Float);
        let dones = Tensor::zeros([n_envs], (Kind::Bool, Device::Cpu));
        let next_states = Tensor::randn([n_envs, STATE_SIZE as i64], (Kind::Float, Device::Cpu));

        trajectory.add(states, rewards, out.log_prob, out.actions, out.value, dones);
        states = next_states;
    }

    info!(steps = trajectory.len(), score = trajectory.score(), "rollout collected");
    println!("Timesteps recorded: {}", trajectory.len());
    println!("Score:              {:.3}", trajectory.score());
    println!(
        "Mean log-prob:      {:.3}",
        mean_of(&trajectory[Column::Prob])
    );
    Ok(())
}

fn mean_of(rows: &[Tensor]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    Tensor::cat(rows, 0).mean(Kind::Double).double_value(&[])
}

fn arg_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
