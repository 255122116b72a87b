//! Keyed strategy storage shared by the detector and the handler.
//!
//! A [`StrategyRegistry`] maps a pair key to one strategy. Registering a key
//! that is already present replaces the previous strategy without error.
//! There is no removal: strategies live as long as the registry.

use log::debug;
use rustc_hash::FxHashMap;

use crate::dispatch::error::CollisionError;

/// Plain key → strategy mapping, as contributed by a collider.
pub type StrategyMap<S> = FxHashMap<String, S>;

/// Fails with [`CollisionError::InvalidArgument`] unless both batch halves
/// have the same length.
pub fn ensure_same_len(keys: usize, strategies: usize) -> Result<(), CollisionError> {
    if keys != strategies {
        return Err(CollisionError::InvalidArgument { keys, strategies });
    }
    Ok(())
}

/// Map of string keys to strategies of type `S`.
pub struct StrategyRegistry<S> {
    strategies: StrategyMap<S>,
}

impl<S> Default for StrategyRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StrategyRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        StrategyRegistry {
            strategies: FxHashMap::default(),
        }
    }

    /// Store `strategy` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, strategy: S) {
        let key = key.into();
        if self.strategies.insert(key.clone(), strategy).is_some() {
            debug!("Strategy for '{}' overwritten", key);
        }
    }

    /// Register `keys[i]` → `strategies[i]` for every index.
    ///
    /// The lengths are checked first; on mismatch nothing is registered.
    pub fn register_batch<K: Into<String>>(
        &mut self,
        keys: Vec<K>,
        strategies: Vec<S>,
    ) -> Result<(), CollisionError> {
        ensure_same_len(keys.len(), strategies.len())?;
        for (key, strategy) in keys.into_iter().zip(strategies) {
            self.register(key, strategy);
        }
        Ok(())
    }

    /// Merge a whole mapping. Later duplicates overwrite earlier ones.
    pub fn register_all<K, I>(&mut self, mapping: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, S)>,
    {
        for (key, strategy) in mapping {
            self.register(key, strategy);
        }
    }

    pub fn get(&self, key: &str) -> Option<&S> {
        self.strategies.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut S> {
        self.strategies.get_mut(key)
    }

    /// Returns `true` if a strategy is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// Iterator over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.strategies.keys()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
