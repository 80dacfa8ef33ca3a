use thiserror::Error;

#[derive(Debug, Error)]
pub enum BanditError {
    #[error("Arm probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("A bandit needs at least one arm")]
    NoArms,
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("'pull' is not available with batch_size {0}, use 'batch_pull'")]
    SinglePullInBatchMode(usize),
    #[error("Batch shape mismatch: {indices} arm indices against {counts} pull counts")]
    BatchShapeMismatch { indices: usize, counts: usize },
    #[error("Total number of pulls {got} does not match batch_size {expected}")]
    BatchSizeMismatch { expected: usize, got: usize },
}
