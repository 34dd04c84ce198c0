/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::GeneratorConfig;
use crate::shared::Request;

/// Where the driver loop gets its requests from.
pub trait RequestSource {
    fn next_request(&mut self) -> Request;

    /// How long to wait before asking for the next request.
    fn next_interval(&mut self) -> Duration;
}

/**
 * Uniformly random requests.
 *
 * Floors are drawn from 1..=n_floors, directions with equal probability, and
 * intervals from [min_interval, max_interval) milliseconds.
 */
pub struct RandomRequestGenerator<R: Rng = StdRng> {
    rng: R,
    n_floors: u8,
    min_interval: u64,
    max_interval: u64,
}

impl RandomRequestGenerator<StdRng> {
    /// Seeded when the configuration carries a seed, from OS entropy otherwise.
    pub fn from_config(n_floors: u8, config: &GeneratorConfig) -> RandomRequestGenerator<StdRng> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomRequestGenerator::new(rng, n_floors, config.min_interval, config.max_interval)
    }
}

impl<R: Rng> RandomRequestGenerator<R> {
    pub fn new(rng: R, n_floors: u8, min_interval: u64, max_interval: u64) -> RandomRequestGenerator<R> {
        RandomRequestGenerator {
            rng,
            n_floors: n_floors.max(1),
            min_interval,
            max_interval: max_interval.max(min_interval.saturating_add(1)),
        }
    }
}

impl<R: Rng> RequestSource for RandomRequestGenerator<R> {
    fn next_request(&mut self) -> Request {
        let floor = self.rng.random_range(1..=self.n_floors);
        let going_up = self.rng.random_bool(0.5);
        Request::new(floor, going_up)
    }

    fn next_interval(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(self.min_interval..self.max_interval))
    }
}
