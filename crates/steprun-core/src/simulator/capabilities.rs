//! Side-effecting capabilities the simulator depends on.
//!
//! Randomness, time and process termination are reached only through these
//! traits so that tests can replace each of them.

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use log::error;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::time::Instant;

/// Source of bounded random integers.
pub trait RandomSource: Send + Sync {
    /// Draw a value uniformly from `0..bound`. `bound` is never zero.
    fn below(&self, bound: u64) -> u64;
}

/// Clock used both to simulate work and to measure how long it took.
#[async_trait]
pub trait Timer: Send + Sync {
    fn now(&self) -> Instant;

    /// Suspend the calling task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Brings the host process down when a test step crashes.
pub trait Terminator: Send + Sync {
    /// Production implementations never return.
    fn terminate(&self);
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, bound: u64) -> u64 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible RNG for runs that need the same sequence of outcomes.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, bound: u64) -> u64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}

/// Tokio's clock. Honors `tokio::time::pause`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Exits the process immediately, skipping destructors and lock release.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self) {
        error!("Oh no! The tests caused a server crash!");
        std::process::exit(1);
    }
}
