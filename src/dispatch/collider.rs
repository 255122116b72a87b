//! Collision orchestrator.
//!
//! [`Collider`] ties a [`Detector`], a [`Handler`] and a [`Tracker`] together
//! and derives the strategy key for each pair itself, so callers work with
//! colliders only:
//!
//! ```ignore
//! let mut collider = Collider::new();
//! collider.register_collidable(&friend);
//! collider.register_collidable(&enemy);
//!
//! // once per tick
//! if collider.detect_collision(&friend, &enemy) {
//!     collider.track_collision(Collision::with_priority(friend, enemy, Priority::HIGHEST));
//! }
//! collider.handle_and_clear()?;
//! ```
//!
//! The caller decides which pairs to test, in which direction, and with what
//! priority to track them. The orchestrator never infers priority.

use log::debug;

use crate::dispatch::collidable::{Collidable, DetectFn, HandleFn};
use crate::dispatch::collision::Collision;
use crate::dispatch::detector::Detector;
use crate::dispatch::error::CollisionError;
use crate::dispatch::handler::Handler;
use crate::dispatch::key::collision_key;
use crate::dispatch::registry::ensure_same_len;
use crate::dispatch::tracker::Tracker;

/// Detection, tracking and handling of collisions between colliders of type `C`.
pub struct Collider<C> {
    detector: Detector<C>,
    handler: Handler<C>,
    tracker: Tracker<C>,
}

impl<C> Default for Collider<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Collider<C> {
    /// Collider with no strategies and nothing tracked.
    pub fn new() -> Self {
        Collider {
            detector: Detector::new(),
            handler: Handler::new(),
            tracker: Tracker::new(),
        }
    }

    /// Collider pre-loaded from key → strategy mappings.
    pub fn with_maps<KD, ID, KH, IH>(detectors: ID, handlers: IH) -> Self
    where
        KD: Into<String>,
        ID: IntoIterator<Item = (KD, DetectFn<C>)>,
        KH: Into<String>,
        IH: IntoIterator<Item = (KH, HandleFn<C>)>,
    {
        let mut collider = Self::new();
        collider.register_detector_map(detectors);
        collider.register_handler_map(handlers);
        collider
    }

    /// Collider pre-loaded from parallel key/strategy lists.
    ///
    /// Both pairs of lists are validated before anything is registered.
    pub fn with_batches<KD: Into<String>, KH: Into<String>>(
        detection_keys: Vec<KD>,
        detectors: Vec<DetectFn<C>>,
        handler_keys: Vec<KH>,
        handlers: Vec<HandleFn<C>>,
    ) -> Result<Self, CollisionError> {
        ensure_same_len(detection_keys.len(), detectors.len())?;
        ensure_same_len(handler_keys.len(), handlers.len())?;
        let mut collider = Self::new();
        collider.register_detectors(detection_keys, detectors)?;
        collider.register_handlers(handler_keys, handlers)?;
        Ok(collider)
    }

    pub fn register_detector<F>(&mut self, key: impl Into<String>, detector: F)
    where
        F: Fn(&C, &C) -> bool + Send + Sync + 'static,
    {
        self.detector.add_detector(key, Box::new(detector));
    }

    pub fn register_handler<F>(&mut self, key: impl Into<String>, handler: F)
    where
        F: FnMut(&C, &C) + Send + Sync + 'static,
    {
        self.handler.add_handler(key, Box::new(handler));
    }

    /// Register `keys[i]` → `detectors[i]`.
    ///
    /// Fails with [`CollisionError::InvalidArgument`] before touching the
    /// registry when the lengths differ.
    pub fn register_detectors<K: Into<String>>(
        &mut self,
        keys: Vec<K>,
        detectors: Vec<DetectFn<C>>,
    ) -> Result<(), CollisionError> {
        ensure_same_len(keys.len(), detectors.len())?;
        debug!("Registering {} detectors", keys.len());
        self.detector.add_detectors(keys, detectors)
    }

    /// Register `keys[i]` → `handlers[i]`.
    ///
    /// Fails with [`CollisionError::InvalidArgument`] before touching the
    /// registry when the lengths differ.
    pub fn register_handlers<K: Into<String>>(
        &mut self,
        keys: Vec<K>,
        handlers: Vec<HandleFn<C>>,
    ) -> Result<(), CollisionError> {
        ensure_same_len(keys.len(), handlers.len())?;
        debug!("Registering {} handlers", keys.len());
        self.handler.add_handlers(keys, handlers)
    }

    pub fn register_detector_map<K, I>(&mut self, detectors: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DetectFn<C>)>,
    {
        self.detector.add_detector_map(detectors);
    }

    pub fn register_handler_map<K, I>(&mut self, handlers: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, HandleFn<C>)>,
    {
        self.handler.add_handler_map(handlers);
    }

    /// Track `collision` for the next [`Collider::handle_all_tracked`].
    ///
    /// Returns `false` if an identical collision was already tracked.
    pub fn track_collision(&mut self, collision: Collision<C>) -> bool
    where
        C: PartialEq,
    {
        self.tracker.track(collision)
    }

    /// Handle every tracked collision in priority order.
    ///
    /// The tracker is left as is; call [`Collider::clear_tracked`] before the
    /// next cycle, or use [`Collider::handle_and_clear`].
    pub fn handle_all_tracked(&mut self) -> Result<usize, CollisionError> {
        self.handler.handle_all(self.tracker.iter())
    }

    /// Handle every tracked collision, then clear the tracker whatever the
    /// outcome.
    pub fn handle_and_clear(&mut self) -> Result<usize, CollisionError> {
        let result = self.handle_all_tracked();
        self.tracker.clear();
        result
    }

    pub fn clear_tracked(&mut self) {
        self.tracker.clear();
    }

    pub fn tracked(&self) -> &Tracker<C> {
        &self.tracker
    }

    pub fn detector(&self) -> &Detector<C> {
        &self.detector
    }

    pub fn handler(&self) -> &Handler<C> {
        &self.handler
    }
}

impl<C: Collidable> Collider<C> {
    /// One-way detection of `a` against `b`.
    ///
    /// Unregistered pairs never collide.
    pub fn detect_collision(&self, a: &C, b: &C) -> bool {
        let key = collision_key(a, b);
        self.detector.detect(a, b, &key)
    }

    /// Resolve `(a, b)` right away. Unregistered pairs are ignored.
    ///
    /// Returns whether a handler ran.
    pub fn handle_collision(&mut self, a: &C, b: &C) -> bool {
        let key = collision_key(a, b);
        self.handler.handle(a, b, &key)
    }

    /// Merge the detection and handling strategies `collider` contributes.
    pub fn register_collidable(&mut self, collider: &C) {
        let detectors = collider.detection_strategies();
        let handlers = collider.handling_strategies();
        debug!(
            "Registering '{}': {} detectors, {} handlers",
            collider.collision_key(),
            detectors.len(),
            handlers.len()
        );
        self.detector.add_detector_map(detectors);
        self.handler.add_handler_map(handlers);
    }
}
