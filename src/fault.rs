//! Probabilistic failure generator for exercising error paths.
//!
//! The random source is injected so tests can make the outcome reproducible.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;

/// Share of invocations that fail unless configured otherwise.
pub const DEFAULT_FAULT_PROBABILITY: f64 = 0.3;

/// Synthetic failure raised by [`FaultInjector::maybe_fail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("simulated API error")]
pub struct SimulatedFault;

/// Raises [`SimulatedFault`] when a uniform draw in `[0, 1)` is `<=` the
/// configured probability. A probability of zero never fails.
pub struct FaultInjector {
    probability: f64,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl FaultInjector {
    /// Injector backed by an OS-seeded generator.
    pub fn new(probability: f64) -> Self {
        Self::with_rng(probability, StdRng::from_os_rng())
    }

    /// Injector with a reproducible sequence of draws.
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::with_rng(probability, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: RngCore + Send + 'static>(probability: f64, rng: R) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn is_enabled(&self) -> bool {
        self.probability > 0.0
    }

    pub fn maybe_fail(&self) -> Result<(), SimulatedFault> {
        if !self.is_enabled() {
            return Ok(());
        }
        let draw: f64 = self.rng.lock().random();
        if draw <= self.probability {
            Err(SimulatedFault)
        } else {
            Ok(())
        }
    }
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::new(DEFAULT_FAULT_PROBABILITY)
    }
}

impl std::fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaultInjector")
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields the same word forever.
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    #[test]
    fn default_probability_is_thirty_percent() {
        assert_eq!(FaultInjector::default().probability(), 0.3);
    }

    #[test]
    fn zero_probability_never_fails() {
        let injector = FaultInjector::with_rng(0.0, ConstRng(0));
        for _ in 0..100 {
            assert_eq!(injector.maybe_fail(), Ok(()));
        }
    }

    #[test]
    fn full_probability_always_fails() {
        let injector = FaultInjector::with_rng(1.0, ConstRng(u64::MAX));
        for _ in 0..100 {
            assert_eq!(injector.maybe_fail(), Err(SimulatedFault));
        }
    }

    #[test]
    fn low_draw_fails_and_high_draw_passes() {
        assert_eq!(
            FaultInjector::with_rng(0.3, ConstRng(0)).maybe_fail(),
            Err(SimulatedFault)
        );
        assert_eq!(
            FaultInjector::with_rng(0.3, ConstRng(u64::MAX)).maybe_fail(),
            Ok(())
        );
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(FaultInjector::with_rng(4.0, ConstRng(0)).probability(), 1.0);
        assert_eq!(FaultInjector::with_rng(-1.0, ConstRng(0)).probability(), 0.0);
    }

    #[test]
    fn seeded_injectors_agree() {
        let a = FaultInjector::seeded(0.5, 42);
        let b = FaultInjector::seeded(0.5, 42);
        let run_a: Vec<_> = (0..50).map(|_| a.maybe_fail().is_err()).collect();
        let run_b: Vec<_> = (0..50).map(|_| b.maybe_fail().is_err()).collect();
        assert_eq!(run_a, run_b);
    }

    #[test]
    fn seeded_failure_rate_tracks_probability() {
        let injector = FaultInjector::seeded(DEFAULT_FAULT_PROBABILITY, 7);
        let failures = (0..2000).filter(|_| injector.maybe_fail().is_err()).count();
        assert!((450..750).contains(&failures), "failures = {}", failures);
    }
}
