mod batched_thompson;
mod epsilon_greedy;
pub mod errors;
mod kl_ucb;
mod many_arms;
mod strategy;
mod thompson;
mod ucb;

pub use strategy::{BatchRequest, BatchedAlgo, BatchedPull, SinglePull, SinglePullAlgo};
