//! The `SearchState` capability.

use std::fmt::Debug;
use std::hash::Hash;

/// One immutable configuration of a problem's world.
///
/// Two states that describe the same configuration must compare equal and
/// hash identically no matter which action sequence produced them. The
/// engines rely on this for duplicate detection. Transformations never
/// mutate a state in place; [`crate::operators::action::Action::enact`]
/// always returns a fresh value.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type.
pub trait SearchState: Clone + Eq + Hash + Debug {}

impl<T> SearchState for T where T: Clone + Eq + Hash + Debug {}
