use super::errors::SimError;
use crate::bandit::BernoulliBandit;
use crate::strategies::{BatchedAlgo, BatchedPull, SinglePull, SinglePullAlgo};

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

/// One full seeded run of a single-pull (or many-arms) strategy against a
/// fresh bandit. The trial seed drives the arm shuffle and the child seeds
/// of bandit and strategy, so one integer reproduces the whole trial.
pub fn run_trial(
    seed: u64,
    algo: SinglePullAlgo,
    probs: &[f64],
    horizon: u64,
) -> Result<f64, SimError> {
    let mut rng = SmallRng::seed_from_u64(seed);

    // shuffle a local copy so the best arm's position carries no signal
    let mut probs = probs.to_vec();
    probs.shuffle(&mut rng);

    let bandit_seed = rng.random();
    let strategy_seed = rng.random();
    let mut bandit = BernoulliBandit::new(&probs, 1, Some(bandit_seed))?;
    let mut strategy = algo.build(bandit.num_arms(), horizon, Some(strategy_seed));

    for _ in 0..horizon {
        let arm = strategy.give_pull()?;
        let reward = bandit.pull(arm)?;
        strategy.get_reward(arm, reward)?;
    }

    Ok(bandit.regret())
}

/// Batched counterpart of [`run_trial`]: `horizon / batch_size` rounds of
/// batch requests and grouped reward feedback.
pub fn run_batch_trial(
    seed: u64,
    algo: BatchedAlgo,
    probs: &[f64],
    horizon: u64,
    batch_size: usize,
) -> Result<f64, SimError> {
    if batch_size == 0 || horizon % batch_size as u64 != 0 {
        return Err(SimError::HorizonNotDivisible {
            horizon,
            batch_size,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);

    let mut probs = probs.to_vec();
    probs.shuffle(&mut rng);

    let bandit_seed = rng.random();
    let strategy_seed = rng.random();
    let mut bandit = BernoulliBandit::new(&probs, batch_size, Some(bandit_seed))?;
    let mut strategy = algo.build(
        bandit.num_arms(),
        horizon,
        bandit.batch_size(),
        Some(strategy_seed),
    );

    for _ in 0..horizon / batch_size as u64 {
        let request = strategy.give_pull()?;
        let rewards = bandit.batch_pull(&request.indices, &request.counts)?;
        strategy.get_reward(&rewards)?;
    }

    Ok(bandit.regret())
}
