use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Units placed across the campus on every tick.
pub const DEFAULT_POOL_SIZE: u32 = 9;

/// Configuration for the placement scheduler.
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Units distributed per tick.
    pub pool_size: u32,
    /// Wall-clock time between ticks.
    pub interval: Duration,
    /// How long `stop` waits for an in-flight tick before aborting it.
    pub shutdown_grace: Duration,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            interval: Duration::from_secs(120),
            shutdown_grace: Duration::from_secs(5),
            seed: None,
        }
    }
}

impl PlacementConfig {
    /// Set the number of units placed per tick.
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the time between ticks.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the shutdown grace period.
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Set the RNG seed for reproducible placement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
