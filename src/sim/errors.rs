use crate::bandit::errors::BanditError;
use crate::strategies::errors::StrategyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error("Horizon {horizon} is not a multiple of batch size {batch_size}")]
    HorizonNotDivisible { horizon: u64, batch_size: usize },
    #[error("At least one trial is required to aggregate")]
    NoTrials,
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
