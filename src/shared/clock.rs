/***************************************/
/*        3rd party libraries          */
/***************************************/
#[cfg(test)]
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/**
 * Source of time for everything that waits in the simulation.
 *
 * Elevators sleep while travelling between floors, while dwelling and while
 * polling an empty queue; the driver sleeps between requests. All of them go
 * through a `Clock` so tests can run without real delays.
 */
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration);

    /// Time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Virtual time. `sleep` advances the clock and returns at once.
///
/// Sleeps from every thread sharing the clock add up, so `elapsed` is only
/// meaningful when a single thread drives it.
#[cfg(test)]
#[derive(Default)]
pub struct SimulatedClock {
    elapsed_ms: AtomicU64,
}

#[cfg(test)]
impl SimulatedClock {
    pub fn new() -> SimulatedClock {
        SimulatedClock::default()
    }
}

#[cfg(test)]
impl Clock for SimulatedClock {
    fn sleep(&self, duration: Duration) {
        self.elapsed_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
        thread::yield_now();
    }

    fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
    }
}
