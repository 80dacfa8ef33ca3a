use super::errors::StrategyError;
use super::strategy::SinglePull;

use std::cmp::Ordering;

#[derive(Clone, Debug, Default)]
struct UcbArm {
    pulls: u64,
    rewards: f64,
}

impl UcbArm {
    /// Upper confidence index at round `total_pulls`. An unpulled arm is
    /// treated as most favorable so it gets explored first.
    fn index(&self, total_pulls: u64) -> f64 {
        if self.pulls == 0 {
            return f64::INFINITY;
        }

        let mean = self.rewards / self.pulls as f64;
        mean + (2.0 * (total_pulls as f64).ln() / self.pulls as f64).sqrt()
    }
}

pub struct Ucb {
    arms: Vec<UcbArm>,
    total_pulls: u64,
}

impl Ucb {
    pub fn new(num_arms: usize, _horizon: u64) -> Self {
        Self {
            arms: vec![UcbArm::default(); num_arms],
            total_pulls: 0,
        }
    }
}

impl SinglePull for Ucb {
    fn give_pull(&mut self) -> Result<usize, StrategyError> {
        self.total_pulls += 1;
        self.arms
            .iter()
            .enumerate()
            .map(|(index, arm)| (index, arm.index(self.total_pulls)))
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(index, _)| index)
            .ok_or(StrategyError::NoArmsAvailable)
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
