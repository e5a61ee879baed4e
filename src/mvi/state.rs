//! Base trait for store state.

use std::fmt;

/// Marker trait for state objects held by a store.
///
/// States should be:
/// - Immutable (Clone to derive the next state)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the value a reducer substitutes when no state exists yet.
pub trait State: Clone + fmt::Debug + PartialEq + Default + 'static {}
