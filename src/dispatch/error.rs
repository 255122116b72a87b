//! Error type shared by every fallible dispatch operation.

use smallvec::SmallVec;
use thiserror::Error;

/// Keys reported by [`CollisionError::MissingStrategy`].
///
/// Most ticks miss zero or one key, so the list stays on the stack.
pub type MissingKeys = SmallVec<[String; 4]>;

/// Failures reported by the collision dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// Batch registration received key and strategy sequences of different
    /// lengths. Nothing was registered.
    #[error("keys.len() != strategies.len() ({keys} != {strategies})")]
    InvalidArgument { keys: usize, strategies: usize },

    /// Bulk handling met tracked collisions whose key has no handling
    /// strategy. Those records were skipped; all others were handled.
    #[error("no handling strategy for {keys:?} ({handled} collisions handled)")]
    MissingStrategy { keys: MissingKeys, handled: usize },

    /// A priority outside `0..=5`.
    #[error("priority {0} is outside 0..=5")]
    PriorityOutOfRange(u8),
}
