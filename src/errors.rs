use crate::grader::errors::GraderError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Grader(#[from] GraderError),
}
