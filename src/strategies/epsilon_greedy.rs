use super::errors::StrategyError;
use super::strategy::SinglePull;
use crate::rng::MaybeSeededRng;

use rand::Rng;
use std::cmp::Ordering;

#[derive(Clone, Debug, Default)]
struct ValueArm {
    pulls: u64,
    value: f64,
}

impl ValueArm {
    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.value += (reward - self.value) / self.pulls as f64;
    }
}

pub struct EpsilonGreedy {
    arms: Vec<ValueArm>,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, _horizon: u64, epsilon: f64, seed: Option<u64>) -> Self {
        Self {
            arms: vec![ValueArm::default(); num_arms],
            epsilon,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl SinglePull for EpsilonGreedy {
    fn give_pull(&mut self) -> Result<usize, StrategyError> {
        if self.arms.is_empty() {
            return Err(StrategyError::NoArmsAvailable);
        }

        if self.rng.get_rng().random::<f64>() < self.epsilon {
            Ok(self.rng.get_rng().random_range(0..self.arms.len()))
        } else {
            self.arms
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal))
                .map(|(index, _)| index)
                .ok_or(StrategyError::NoArmsAvailable)
        }
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
        let mut strategy = EpsilonGreedy::new(0, 100, 0.1, SEED);
        assert!(strategy.give_pull().is_err());
    }

    #[test]
    fn exploits_best_arm_when_greedy() {
        let mut strategy = EpsilonGreedy::new(3, 100, 0.0, SEED);
        strategy.get_reward(1, 1.0).unwrap();

        for _ in 0..10 {
            assert_eq!(strategy.give_pull().unwrap(), 1);
        }
    }

    #[test]
    fn update_tracks_running_mean() {
        let mut strategy = EpsilonGreedy::new(2, 100, 0.1, SEED);
        strategy.get_reward(0, 1.0).unwrap();
        strategy.get_reward(0, 0.0).unwrap();

        assert_eq!(strategy.arms[0].pulls, 2);
        assert_eq!(strategy.arms[0].value, 0.5);
    }

    #[test]
    fn rejects_unknown_arm() {
        let mut strategy = EpsilonGreedy::new(2, 100, 0.1, SEED);
        assert!(strategy.get_reward(5, 1.0).is_err());
    }
}
