use super::errors::StrategyError;
use super::strategy::SinglePull;
use crate::rng::MaybeSeededRng;

use rand::rngs::SmallRng;
use rand_distr::{Beta, Distribution};
use std::cmp::Ordering;

/// Beta(successes + 1, failures + 1) posterior over one arm's mean.
#[derive(Clone, Debug, Default)]
pub(super) struct PosteriorArm {
    successes: f64,
    failures: f64,
}

impl PosteriorArm {
    pub(super) fn sample(&self, rng: &mut SmallRng) -> Result<f64, StrategyError> {
        let sample = Beta::new(self.successes + 1.0, self.failures + 1.0)
            .map_err(|e| StrategyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(sample)
    }

    pub(super) fn update(&mut self, reward: f64) {
        self.successes += reward;
        self.failures += 1.0 - reward;
    }
}

pub struct ThompsonSampling {
    arms: Vec<PosteriorArm>,
    rng: MaybeSeededRng,
}

impl ThompsonSampling {
    pub fn new(num_arms: usize, _horizon: u64, seed: Option<u64>) -> Self {
        Self {
            arms: vec![PosteriorArm::default(); num_arms],
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl SinglePull for ThompsonSampling {
    fn give_pull(&mut self) -> Result<usize, StrategyError> {
        let rng = self.rng.get_rng();
        let samples = self
            .arms
            .iter()
            .map(|arm| arm.sample(rng))
            .collect::<Result<Vec<_>, _>>()?;

        samples
            .into_iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(index, _)| index)
            .ok_or(StrategyError::NoArmsAvailable)
    }

    fn get_reward(&mut self, arm_index: usize, reward: f64) -> Result<(), StrategyError> {
        self.arms
            .get_mut(arm_index)
            .ok_or(StrategyError::ArmNotFound(arm_index))?
            .update(reward);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn draw_empty() {
        let mut strategy = ThompsonSampling::new(0, 100, SEED);
        assert!(strategy.give_pull().is_err());
    }

    #[test]
    fn posterior_update_counts_successes_and_failures() {
        let mut arm = PosteriorArm::default();
        arm.update(1.0);
        arm.update(1.0);
        arm.update(0.0);

        assert_eq!(arm.successes, 2.0);
        assert_eq!(arm.failures, 1.0);
    }

    #[test]
    fn prefers_arm_with_overwhelming_evidence() {
        let mut strategy = ThompsonSampling::new(2, 100, SEED);
        for _ in 0..200 {
            strategy.get_reward(0, 1.0).unwrap();
            strategy.get_reward(1, 0.0).unwrap();
        }

        let draws: Vec<usize> = (0..20).map(|_| strategy.give_pull().unwrap()).collect();
        assert!(draws.iter().all(|&arm| arm == 0));
    }

    #[test]
    fn rejects_unknown_arm() {
        let mut strategy = ThompsonSampling::new(2, 100, SEED);
        assert!(strategy.get_reward(5, 1.0).is_err());
    }
}
