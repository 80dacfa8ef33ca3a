use crate::sim::errors::SimError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraderError {
    #[error("Failed to read test case: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed test case {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("Test case describes task {found}, expected task {expected}")]
    WrongTask { expected: u8, found: u8 },
    #[error(transparent)]
    Sim(#[from] SimError),
}
