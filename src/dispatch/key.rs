//! Strategy lookup key derivation.
//!
//! A pair key is the plain concatenation of both collision keys, `one` first.
//! It is order-sensitive: `("Friend", "Enemy")` yields `"FriendEnemy"` while
//! the reversed pair yields `"EnemyFriend"`. Nothing canonicalizes the order,
//! so strategies registered for one direction never fire for the other.

use crate::dispatch::collidable::Collidable;

/// Concatenate two raw collision keys into a strategy key.
pub fn pair_key(one: &str, other: &str) -> String {
    let mut key = String::with_capacity(one.len() + other.len());
    key.push_str(one);
    key.push_str(other);
    key
}

/// Strategy key for the ordered pair `(one, other)`.
pub fn collision_key<C: Collidable>(one: &C, other: &C) -> String {
    pair_key(one.collision_key(), other.collision_key())
}
