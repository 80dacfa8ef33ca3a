use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("No arms to choose from")]
    NoArmsAvailable,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Failed to sample posterior: {0}")]
    SamplingError(String),
}
