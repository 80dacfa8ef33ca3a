use super::errors::StrategyError;
use super::strategy::SinglePull;
use crate::rng::MaybeSeededRng;

use rand::Rng;

#[derive(Clone, Debug, Default)]
struct PullStats {
    pulls: u64,
    rewards: f64,
}

impl PullStats {
    /// Empirical mean, optimistic for an arm that was never pulled so a
    /// fresh candidate is given a chance before being abandoned.
    fn mean(&self) -> f64 {
        if self.pulls == 0 {
            return f64::INFINITY;
        }

        self.rewards / self.pulls as f64
    }
}

/// Commit-or-resample strategy for the regime where the arm count is on the
/// order of the horizon: stick with the current arm while its empirical mean
/// clears a high threshold, otherwise jump to a uniformly random arm. With
/// probabilities spread over [0, 1) a near-best arm is found after a
/// geometric number of resamples and exploited for the rest of the horizon.
pub struct ManyArms {
    arms: Vec<PullStats>,
    threshold: f64,
    current: usize,
    rng: MaybeSeededRng,
}

impl ManyArms {
    pub fn new(num_arms: usize, _horizon: u64, seed: Option<u64>) -> Self {
        let mut rng = MaybeSeededRng::new(seed);
        // accept arms slightly below the best plausible mean (n-1)/n
        let exploit = 0.92 + rng.get_rng().random::<f64>() / 20.0;
        let threshold = if num_arms == 0 {
            0.0
        } else {
            (num_arms as f64 - 1.0) / num_arms as f64 * exploit
        };
        let current = if num_arms == 0 {
            0
        } else {
            rng.get_rng().random_range(0..num_arms)
        };

        Self {
            arms: vec![PullStats::default(); num_arms],
            threshold,
            current,
            rng,
        }
    }
}

impl SinglePull for ManyArms {
    fn give_pull(&mut self) -> Result<usize, StrategyError> {
        if self.arms.is_empty() {
            return Err(StrategyError::NoArmsAvailable);
        }

        if self.arms[self.current].mean() < self.threshold {
            self.current = self.rng.get_rng().random_range(0..self.arms.len());
        }

        Ok(self.current)
    }

    fn get_reward(&mut self, arm_index: usize, reward: f64) -> Result<(), StrategyError> {
        let arm = self
            .arms
            .get_mut(arm_index)
            .ok_or(StrategyError::ArmNotFound(arm_index))?;
        arm.pulls += 1;
        arm.rewards += reward;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn draw_empty() {
        let mut strategy = ManyArms::new(0, 100, SEED);
        assert!(strategy.give_pull().is_err());
    }

    #[test]
    fn sticks_with_an_unpulled_candidate() {
        let mut strategy = ManyArms::new(1000, 1000, SEED);
        let first = strategy.give_pull().unwrap();
        // no feedback yet: the candidate's optimistic mean keeps it selected
        assert_eq!(strategy.give_pull().unwrap(), first);
    }

    #[test]
    fn abandons_arms_that_never_reward() {
        let mut strategy = ManyArms::new(1000, 1000, SEED);
        let mut distinct = std::collections::HashSet::new();

        for _ in 0..100 {
            let arm = strategy.give_pull().unwrap();
            distinct.insert(arm);
            strategy.get_reward(arm, 0.0).unwrap();
        }

        assert!(distinct.len() > 1, "strategy never moved off a dead arm");
    }

    #[test]
    fn keeps_an_arm_that_always_rewards() {
        let mut strategy = ManyArms::new(1000, 1000, SEED);
        let first = strategy.give_pull().unwrap();
        for _ in 0..20 {
            strategy.get_reward(first, 1.0).unwrap();
        }

        for _ in 0..50 {
            assert_eq!(strategy.give_pull().unwrap(), first);
        }
    }

    #[test]
    fn choices_stay_in_range() {
        let mut strategy = ManyArms::new(50, 50, SEED);
        for _ in 0..200 {
            let arm = strategy.give_pull().unwrap();
            assert!(arm < 50);
            strategy.get_reward(arm, 0.0).unwrap();
        }
    }
}
