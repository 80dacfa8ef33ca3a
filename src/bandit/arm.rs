use super::errors::BanditError;

use rand::rngs::SmallRng;
use rand_distr::{Bernoulli, Distribution};

/// One option with a hidden success probability, immutable for the lifetime
/// of the bandit that owns it.
#[derive(Clone, Debug)]
pub struct BernoulliArm {
    p: f64,
    distribution: Bernoulli,
}

impl BernoulliArm {
    pub fn new(p: f64) -> Result<Self, BanditError> {
        let distribution = Bernoulli::new(p).map_err(|_| BanditError::InvalidProbability(p))?;

        Ok(Self { p, distribution })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn pull(&self, rng: &mut SmallRng) -> f64 {
        match self.distribution.sample(rng) {
            true => 1.0,
            false => 0.0,
        }
    }

    pub fn pull_many(&self, count: usize, rng: &mut SmallRng) -> Vec<f64> {
        (0..count).map(|_| self.pull(rng)).collect()
    }
}
