//! Collision resolution by client-supplied actions.
//!
//! Two paths with deliberately different strictness:
//! - [`Handler::handle`] resolves one pair right away and silently does
//!   nothing when the key has no strategy.
//! - [`Handler::handle_all`] resolves a sequence of tracked collisions. A
//!   missing strategy there means a collision was tracked that nobody can
//!   resolve, so it is reported. The record is skipped, the remaining records
//!   are still handled, and the call returns
//!   [`CollisionError::MissingStrategy`] listing the skipped keys.

use log::{trace, warn};

use crate::dispatch::collidable::HandleFn;
use crate::dispatch::collision::Collision;
use crate::dispatch::error::{CollisionError, MissingKeys};
use crate::dispatch::registry::StrategyRegistry;

/// Registry of handling actions.
pub struct Handler<C> {
    strategies: StrategyRegistry<HandleFn<C>>,
}

impl<C> Default for Handler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Handler<C> {
    /// Create a handler with no actions.
    pub fn new() -> Self {
        Handler {
            strategies: StrategyRegistry::new(),
        }
    }

    pub fn add_handler(&mut self, key: impl Into<String>, handler: HandleFn<C>) {
        self.strategies.register(key, handler);
    }

    /// Pairwise registration; see [`StrategyRegistry::register_batch`].
    pub fn add_handlers<K: Into<String>>(
        &mut self,
        keys: Vec<K>,
        handlers: Vec<HandleFn<C>>,
    ) -> Result<(), CollisionError> {
        self.strategies.register_batch(keys, handlers)
    }

    pub fn add_handler_map<K, I>(&mut self, handlers: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, HandleFn<C>)>,
    {
        self.strategies.register_all(handlers);
    }

    /// Resolve `(a, b)` now with the action under `key`, if any.
    ///
    /// Returns whether an action ran.
    pub fn handle(&mut self, a: &C, b: &C, key: &str) -> bool {
        match self.strategies.get_mut(key) {
            Some(handler) => {
                handler(a, b);
                true
            }
            None => {
                trace!("No handler for '{}'", key);
                false
            }
        }
    }

    /// Resolve every collision in `collisions`, in the order given.
    ///
    /// Each action receives the record's "one" first and its "other" second.
    /// Returns the number of collisions handled.
    pub fn handle_all<'a, I>(&mut self, collisions: I) -> Result<usize, CollisionError>
    where
        I: IntoIterator<Item = &'a Collision<C>>,
        C: 'a,
    {
        let mut handled = 0;
        let mut missing = MissingKeys::new();
        for collision in collisions {
            let key = collision.collision_key();
            let Some(handler) = self.strategies.get_mut(key) else {
                warn!("Tracked collision '{}' has no handler, skipping", key);
                if !missing.iter().any(|k| k == key) {
                    missing.push(key.to_owned());
                }
                continue;
            };
            let one = collision.one();
            handler(one, collision.the_other(one));
            handled += 1;
        }

        if missing.is_empty() {
            Ok(handled)
        } else {
            Err(CollisionError::MissingStrategy {
                keys: missing,
                handled,
            })
        }
    }

    pub fn strategies(&self) -> &StrategyRegistry<HandleFn<C>> {
        &self.strategies
    }
}
