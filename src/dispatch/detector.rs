//! Collision detection by client-supplied predicates.
//!
//! The detector owns no geometry. For every pair key it holds a predicate
//! written by the client; [`Detector::detect`] looks the key up and runs it.
//! Pairs without a predicate are inert: they never collide.

use log::trace;

use crate::dispatch::collidable::DetectFn;
use crate::dispatch::error::CollisionError;
use crate::dispatch::registry::StrategyRegistry;

/// Registry of detection predicates.
pub struct Detector<C> {
    strategies: StrategyRegistry<DetectFn<C>>,
}

impl<C> Default for Detector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Detector<C> {
    /// Create a detector with no predicates.
    pub fn new() -> Self {
        Detector {
            strategies: StrategyRegistry::new(),
        }
    }

    pub fn add_detector(&mut self, key: impl Into<String>, detector: DetectFn<C>) {
        self.strategies.register(key, detector);
    }

    /// Pairwise registration; see [`StrategyRegistry::register_batch`].
    pub fn add_detectors<K: Into<String>>(
        &mut self,
        keys: Vec<K>,
        detectors: Vec<DetectFn<C>>,
    ) -> Result<(), CollisionError> {
        self.strategies.register_batch(keys, detectors)
    }

    pub fn add_detector_map<K, I>(&mut self, detectors: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DetectFn<C>)>,
    {
        self.strategies.register_all(detectors);
    }

    /// One-way detection of `a` against `b` using the predicate under `key`.
    ///
    /// Returns `false` when no predicate is registered. Otherwise the
    /// predicate runs with `(a, b)` in that order and its answer is returned
    /// unchanged.
    pub fn detect(&self, a: &C, b: &C, key: &str) -> bool {
        match self.strategies.get(key) {
            Some(detector) => detector(a, b),
            None => {
                trace!("No detector for '{}'", key);
                false
            }
        }
    }

    pub fn strategies(&self) -> &StrategyRegistry<DetectFn<C>> {
        &self.strategies
    }
}
