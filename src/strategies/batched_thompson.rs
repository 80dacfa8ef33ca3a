use super::errors::StrategyError;
use super::strategy::{BatchRequest, BatchedPull};
use super::thompson::PosteriorArm;
use crate::bandit::BatchRewards;
use crate::rng::MaybeSeededRng;

use std::cmp::Ordering;

/// Thompson sampling for the batched protocol: the posterior is sampled once
/// per slot in the batch, and only updated when the whole batch of rewards
/// comes back.
pub struct BatchedThompson {
    arms: Vec<PosteriorArm>,
    batch_size: usize,
    rng: MaybeSeededRng,
}

impl BatchedThompson {
    pub fn new(num_arms: usize, _horizon: u64, batch_size: usize, seed: Option<u64>) -> Self {
        Self {
            arms: vec![PosteriorArm::default(); num_arms],
            batch_size,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl BatchedPull for BatchedThompson {
    fn give_pull(&mut self) -> Result<BatchRequest, StrategyError> {
        if self.arms.is_empty() {
            return Err(StrategyError::NoArmsAvailable);
        }

        let rng = self.rng.get_rng();
        let mut pulls = vec![0usize; self.arms.len()];
        for _ in 0..self.batch_size {
            let samples = self
                .arms
                .iter()
                .map(|arm| arm.sample(rng))
                .collect::<Result<Vec<_>, _>>()?;
            let arm = samples
                .into_iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .map(|(index, _)| index)
                .ok_or(StrategyError::NoArmsAvailable)?;
            pulls[arm] += 1;
        }

        let (indices, counts) = pulls
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .unzip();

        Ok(BatchRequest { indices, counts })
    }

    fn get_reward(&mut self, rewards: &BatchRewards) -> Result<(), StrategyError> {
        for (&arm_index, arm_rewards) in rewards {
            let arm = self
                .arms
                .get_mut(arm_index)
                .ok_or(StrategyError::ArmNotFound(arm_index))?;
            for &reward in arm_rewards {
                arm.update(reward);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn draw_empty() {
        let mut strategy = BatchedThompson::new(0, 100, 10, SEED);
        assert!(strategy.give_pull().is_err());
    }

    #[test]
    fn request_counts_sum_to_batch_size() {
        let mut strategy = BatchedThompson::new(3, 100, 10, SEED);

        for _ in 0..10 {
            let request = strategy.give_pull().unwrap();
            assert_eq!(request.indices.len(), request.counts.len());
            assert_eq!(request.counts.iter().sum::<usize>(), 10);
            assert!(request.indices.iter().all(|&arm| arm < 3));
        }
    }

    #[test]
    fn requests_are_reproducible_for_identical_seed() {
        let mut a = BatchedThompson::new(3, 100, 10, SEED);
        let mut b = BatchedThompson::new(3, 100, 10, SEED);

        for _ in 0..5 {
            assert_eq!(a.give_pull().unwrap(), b.give_pull().unwrap());
        }
    }

    #[test]
    fn concentrates_on_arm_with_overwhelming_evidence() {
        let mut strategy = BatchedThompson::new(2, 100, 10, SEED);
        let rewards = BatchRewards::from([(0, vec![1.0; 200]), (1, vec![0.0; 200])]);
        strategy.get_reward(&rewards).unwrap();

        let request = strategy.give_pull().unwrap();
        assert_eq!(request.indices, vec![0]);
        assert_eq!(request.counts, vec![10]);
    }

    #[test]
    fn rejects_unknown_arm_in_rewards() {
        let mut strategy = BatchedThompson::new(2, 100, 10, SEED);
        let rewards = BatchRewards::from([(7, vec![1.0])]);
        assert!(strategy.get_reward(&rewards).is_err());
    }
}
