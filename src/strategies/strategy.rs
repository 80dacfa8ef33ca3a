use super::batched_thompson::BatchedThompson;
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::StrategyError;
use super::kl_ucb::KlUcb;
use super::many_arms::ManyArms;
use super::thompson::ThompsonSampling;
use super::ucb::Ucb;
use crate::bandit::BatchRewards;

/// Arms requested for one batched round. The pull counts must sum to the
/// batch size the strategy was constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRequest {
    pub indices: Vec<usize>,
    pub counts: Vec<usize>,
}

/// One zero-indexed arm choice per round, one reward fed back per round.
/// Also drives the many-arms protocol, which differs only in scale.
pub trait SinglePull: Send {
    fn give_pull(&mut self) -> Result<usize, StrategyError>;
    fn get_reward(&mut self, arm_index: usize, reward: f64) -> Result<(), StrategyError>;
}

/// A whole batch of pulls committed before any reward is observed.
pub trait BatchedPull: Send {
    fn give_pull(&mut self) -> Result<BatchRequest, StrategyError>;
    fn get_reward(&mut self, rewards: &BatchRewards) -> Result<(), StrategyError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinglePullAlgo {
    EpsilonGreedy,
    Ucb,
    KlUcb,
    Thompson,
    ManyArms,
}

impl SinglePullAlgo {
    pub fn build(&self, num_arms: usize, horizon: u64, seed: Option<u64>) -> Box<dyn SinglePull> {
        match self {
            Self::EpsilonGreedy => Box::new(EpsilonGreedy::new(num_arms, horizon, 0.1, seed)),
            Self::Ucb => Box::new(Ucb::new(num_arms, horizon)),
            Self::KlUcb => Box::new(KlUcb::new(num_arms, horizon)),
            Self::Thompson => Box::new(ThompsonSampling::new(num_arms, horizon, seed)),
            Self::ManyArms => Box::new(ManyArms::new(num_arms, horizon, seed)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EpsilonGreedy => "Epsilon Greedy",
            Self::Ucb => "UCB",
            Self::KlUcb => "KL-UCB",
            Self::Thompson => "Thompson Sampling",
            Self::ManyArms => "Many Arms",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchedAlgo {
    Thompson,
}

impl BatchedAlgo {
    pub fn build(
        &self,
        num_arms: usize,
        horizon: u64,
        batch_size: usize,
        seed: Option<u64>,
    ) -> Box<dyn BatchedPull> {
        match self {
            Self::Thompson => Box::new(BatchedThompson::new(num_arms, horizon, batch_size, seed)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Thompson => "Batched Thompson",
        }
    }
}
