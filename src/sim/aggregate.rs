use super::errors::SimError;
use super::trial::{run_batch_trial, run_trial};
use crate::strategies::{BatchedAlgo, SinglePullAlgo};

use rayon::prelude::*;
use tracing::debug;

/// Mean regret over `num_sims` independent trials with seeds `0..num_sims`,
/// run on a bounded worker pool. A single failing trial fails the whole
/// aggregate; trials are deterministic per seed so there is nothing to retry.
pub fn simulate(
    algo: SinglePullAlgo,
    probs: &[f64],
    horizon: u64,
    num_sims: usize,
    workers: usize,
) -> Result<f64, SimError> {
    let regrets = collect_regrets(num_sims, workers, |seed| {
        run_trial(seed, algo, probs, horizon)
    })?;
    let mean = mean(&regrets);
    debug!(algo = algo.name(), num_sims, mean_regret = mean, "aggregated trials");

    Ok(mean)
}

/// Batched counterpart of [`simulate`].
pub fn batch_simulate(
    algo: BatchedAlgo,
    probs: &[f64],
    horizon: u64,
    batch_size: usize,
    num_sims: usize,
    workers: usize,
) -> Result<f64, SimError> {
    let regrets = collect_regrets(num_sims, workers, |seed| {
        run_batch_trial(seed, algo, probs, horizon, batch_size)
    })?;
    let mean = mean(&regrets);
    debug!(algo = algo.name(), num_sims, mean_regret = mean, "aggregated trials");

    Ok(mean)
}

fn collect_regrets<F>(num_sims: usize, workers: usize, trial: F) -> Result<Vec<f64>, SimError>
where
    F: Fn(u64) -> Result<f64, SimError> + Sync,
{
    if num_sims == 0 {
        return Err(SimError::NoTrials);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    pool.install(|| {
        (0..num_sims as u64)
            .into_par_iter()
            .map(|seed| trial(seed))
            .collect()
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBS: [f64; 3] = [0.3, 0.5, 0.7];
    const WORKERS: usize = 10;

    #[test]
    fn zero_sims_is_an_error() {
        assert!(matches!(
            simulate(SinglePullAlgo::Thompson, &PROBS, 100, 0, WORKERS),
            Err(SimError::NoTrials)
        ));
    }

    #[test]
    fn single_sim_equals_the_seed_zero_trial() {
        let aggregate = simulate(SinglePullAlgo::Thompson, &PROBS, 500, 1, WORKERS).unwrap();
        let single = run_trial(0, SinglePullAlgo::Thompson, &PROBS, 500).unwrap();
        assert_eq!(aggregate, single);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let a = simulate(SinglePullAlgo::Ucb, &PROBS, 200, 10, WORKERS).unwrap();
        let b = simulate(SinglePullAlgo::Ucb, &PROBS, 200, 10, WORKERS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn aggregate_matches_sequential_mean() {
        let aggregate = simulate(SinglePullAlgo::Thompson, &PROBS, 200, 8, WORKERS).unwrap();

        let sequential = (0..8)
            .map(|seed| run_trial(seed, SinglePullAlgo::Thompson, &PROBS, 200).unwrap())
            .sum::<f64>()
            / 8.0;
        assert_eq!(aggregate, sequential);
    }

    #[test]
    fn batch_aggregate_propagates_contract_errors() {
        // horizon not divisible by batch size fails every trial, and the
        // aggregate must surface it instead of skipping
        let result = batch_simulate(BatchedAlgo::Thompson, &PROBS, 105, 10, 5, WORKERS);
        assert!(result.is_err());
    }

    #[test]
    fn batch_single_sim_equals_the_seed_zero_trial() {
        let aggregate =
            batch_simulate(BatchedAlgo::Thompson, &PROBS, 100, 10, 1, WORKERS).unwrap();
        let single = run_batch_trial(0, BatchedAlgo::Thompson, &PROBS, 100, 10).unwrap();
        assert_eq!(aggregate, single);
    }
}
