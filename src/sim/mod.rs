mod aggregate;
pub mod errors;
mod trial;

pub use aggregate::{batch_simulate, simulate};
pub use trial::{run_batch_trial, run_trial};
