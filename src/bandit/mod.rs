mod arm;
mod bernoulli;
pub mod errors;

pub use bernoulli::{BatchRewards, BernoulliBandit};
