use rand::{rngs::SmallRng, SeedableRng};

/// RNG handle threaded through bandits and strategies so that a trial can be
/// replayed from a single seed. Unseeded instances draw from the OS.
#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
