use super::arm::BernoulliArm;
use super::errors::BanditError;
use crate::rng::MaybeSeededRng;

use std::collections::HashMap;

pub type BatchRewards = HashMap<usize, Vec<f64>>;

/// Bernoulli reward environment. Owns its arms and accumulates the regret of
/// every pull relative to the best arm.
#[derive(Debug)]
pub struct BernoulliBandit {
    arms: Vec<BernoulliArm>,
    batch_size: usize,
    max_p: f64,
    regret: f64,
    rng: MaybeSeededRng,
}

impl BernoulliBandit {
    pub fn new(probs: &[f64], batch_size: usize, seed: Option<u64>) -> Result<Self, BanditError> {
        if probs.is_empty() {
            return Err(BanditError::NoArms);
        }
        if batch_size == 0 {
            return Err(BanditError::InvalidBatchSize);
        }

        let arms = probs
            .iter()
            .map(|&p| BernoulliArm::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        let max_p = arms.iter().map(|arm| arm.p()).fold(f64::MIN, f64::max);

        Ok(Self {
            arms,
            batch_size,
            max_p,
            regret: 0.0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    /// Draws a single reward from one arm. Only valid when the bandit was
    /// created with `batch_size == 1`.
    pub fn pull(&mut self, index: usize) -> Result<f64, BanditError> {
        if self.batch_size != 1 {
            return Err(BanditError::SinglePullInBatchMode(self.batch_size));
        }

        let arm = self.arms.get(index).ok_or(BanditError::ArmNotFound(index))?;
        let reward = arm.pull(self.rng.get_rng());
        self.regret += self.max_p - reward;

        Ok(reward)
    }

    /// Draws `counts[i]` rewards from arm `indices[i]` for the whole batch at
    /// once. The pull counts must sum to the configured batch size.
    pub fn batch_pull(
        &mut self,
        indices: &[usize],
        counts: &[usize],
    ) -> Result<BatchRewards, BanditError> {
        if indices.len() != counts.len() {
            return Err(BanditError::BatchShapeMismatch {
                indices: indices.len(),
                counts: counts.len(),
            });
        }

        let total: usize = counts.iter().sum();
        if total != self.batch_size {
            return Err(BanditError::BatchSizeMismatch {
                expected: self.batch_size,
                got: total,
            });
        }

        let mut rewards = BatchRewards::with_capacity(indices.len());
        for (&index, &count) in indices.iter().zip(counts) {
            let arm = self.arms.get(index).ok_or(BanditError::ArmNotFound(index))?;
            let samples = arm.pull_many(count, self.rng.get_rng());
            self.regret += self.max_p * count as f64 - samples.iter().sum::<f64>();
            rewards.entry(index).or_default().extend(samples);
        }

        Ok(rewards)
    }

    pub fn regret(&self) -> f64 {
        self.regret
    }

    pub fn num_arms(&self) -> usize {
        self.arms.len()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}
