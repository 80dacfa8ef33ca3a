use super::errors::StrategyError;
use super::strategy::SinglePull;

use std::cmp::Ordering;

const BISECTION_WIDTH: f64 = 1e-3;
const EXPLORATION_C: f64 = 3.0;

/// KL divergence between Bernoulli(p) and Bernoulli(q) for q in (0, 1).
fn kl_divergence(p: f64, q: f64) -> f64 {
    if p == 0.0 {
        return (1.0 / (1.0 - q)).ln();
    }
    if p == 1.0 {
        return (1.0 / q).ln();
    }
    p * (p / q).ln() + (1.0 - p) * ((1.0 - p) / (1.0 - q)).ln()
}

/// Largest q >= mean whose divergence from the empirical mean stays within
/// the confidence budget, found by bisection.
fn kl_upper_bound(mean: f64, pulls: u64, total_pulls: u64) -> f64 {
    if pulls == 0 {
        return f64::INFINITY;
    }

    let t = total_pulls as f64;
    let budget = (t.ln() + EXPLORATION_C * t.ln().ln()) / pulls as f64;

    let mut lo = mean;
    let mut hi = 1.0;
    while hi - lo > BISECTION_WIDTH {
        let q = (lo + hi) / 2.0;
        if kl_divergence(mean, q) < budget {
            lo = q;
        } else {
            hi = q;
        }
    }

    (lo + hi) / 2.0
}

#[derive(Clone, Debug, Default)]
struct KlUcbArm {
    pulls: u64,
    rewards: f64,
}

impl KlUcbArm {
    fn index(&self, total_pulls: u64) -> f64 {
        if self.pulls == 0 {
            return f64::INFINITY;
        }

        kl_upper_bound(self.rewards / self.pulls as f64, self.pulls, total_pulls)
    }
}

pub struct KlUcb {
    arms: Vec<KlUcbArm>,
    total_pulls: u64,
}

impl KlUcb {
    pub fn new(num_arms: usize, _horizon: u64) -> Self {
        Self {
            arms: vec![KlUcbArm::default(); num_arms],
            total_pulls: 0,
        }
    }
}

impl SinglePull for KlUcb {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn divergence_is_zero_between_identical_distributions() {
        assert_relative_eq!(kl_divergence(0.5, 0.5), 0.0);
    }

    #[test]
    fn divergence_handles_degenerate_means() {
        assert_relative_eq!(kl_divergence(0.0, 0.5), 2.0_f64.ln());
        assert_relative_eq!(kl_divergence(1.0, 0.5), 2.0_f64.ln());
    }

    #[test]
    fn divergence_grows_with_distance() {
        assert!(kl_divergence(0.5, 0.9) > kl_divergence(0.5, 0.6));
    }

    #[test]
    fn upper_bound_stays_within_unit_interval() {
        let q = kl_upper_bound(0.3, 10, 100);
        assert!(q >= 0.3);
        assert!(q <= 1.0);
    }

    #[test]
    fn upper_bound_tightens_with_more_pulls() {
        let loose = kl_upper_bound(0.3, 5, 100);
        let tight = kl_upper_bound(0.3, 500, 1000);
        assert!(tight < loose);
    }

    #[test]
    fn unpulled_arm_is_most_favorable() {
        assert_eq!(kl_upper_bound(0.0, 0, 100), f64::INFINITY);
    }

    #[test]
    fn explores_every_arm_before_exploiting() {
        let mut strategy = KlUcb::new(3, 100);
        let mut seen = [false; 3];

        for _ in 0..3 {
            let arm = strategy.give_pull().unwrap();
            assert!(!seen[arm], "arm {arm} chosen twice during exploration");
            seen[arm] = true;
            strategy.get_reward(arm, 0.0).unwrap();
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn exploits_clearly_better_arm() {
        let mut strategy = KlUcb::new(2, 100);
        for _ in 0..50 {
            strategy.get_reward(0, 1.0).unwrap();
            strategy.get_reward(1, 0.0).unwrap();
        }
        strategy.total_pulls = 100;

        assert_eq!(strategy.give_pull().unwrap(), 0);
    }
}
