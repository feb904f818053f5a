//! Simulated processing behavior
//!
//! The analyzer models variable processing cost and nondeterministic
//! downstream failures. Both draws go through this capability so callers
//! (and tests) can seed, reshape, or disable them without bypassing the
//! code paths that consume them.

use std::ops::Range;
use std::sync::Mutex;
use std::time::Duration;

/// Simulated per-file processing delay, in milliseconds.
const DELAY_RANGE_MS: Range<u64> = 50..200;

/// Default probability of an injected parsing failure per file.
const FAIL_RATE: f64 = 0.1;

/// Randomness source for simulated latency and failure injection.
///
/// One instance is shared by all workers of a batch; the RNG is locked only
/// for the two draws an item makes.
#[derive(Debug)]
pub struct Simulation {
    rng: Mutex<fastrand::Rng>,
    delay_ms: Option<Range<u64>>,
    fail_rate: f64,
}

impl Simulation {
    /// Entropy-seeded simulation with the default delay range and failure
    /// rate.
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Deterministic simulation: the same seed yields the same draw
    /// sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
            delay_ms: Some(DELAY_RANGE_MS),
            fail_rate: FAIL_RATE,
        }
    }

    /// Override the injected-failure probability, clamped to [0.0, 1.0].
    pub fn with_fail_rate(mut self, rate: f64) -> Self {
        self.fail_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Disable the simulated processing delay.
    pub fn without_delay(mut self) -> Self {
        self.delay_ms = None;
        self
    }

    /// Draw the simulated processing delay for one item, if enabled.
    pub fn next_delay(&self) -> Option<Duration> {
        let range = self.delay_ms.clone()?;
        let mut rng = self.rng.lock().unwrap();
        Some(Duration::from_millis(rng.u64(range)))
    }

    /// Decide whether this item hits the injected parsing failure.
    ///
    /// A draw happens even at rate 0.0; the rate only moves the threshold.
    pub fn should_fail(&self) -> bool {
        let mut rng = self.rng.lock().unwrap();
        rng.f64() < self.fail_rate
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
