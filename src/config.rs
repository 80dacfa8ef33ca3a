use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct SimConfig {
    /// Independent trials per aggregate, seeded 0..num_sims.
    pub num_sims: usize,
    /// KL-UCB is graded with fewer trials; its bisection makes each round
    /// much slower than the other algorithms.
    pub kl_ucb_sims: usize,
    /// Size of the worker pool trials run on.
    pub workers: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraderConfig {
    pub testcase_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub sim: SimConfig,
    pub grader: GraderConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("sim.num_sims", 50_i64)?
            .set_default("sim.kl_ucb_sims", 20_i64)?
            .set_default("sim.workers", 10_i64)?
            .set_default("grader.testcase_dir", "testcases")?
            .add_source(File::with_name("grader").required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.sim.num_sims, 50);
        assert_eq!(config.sim.kl_ucb_sims, 20);
        assert_eq!(config.sim.workers, 10);
        assert_eq!(config.grader.testcase_dir, PathBuf::from("testcases"));
    }
}
