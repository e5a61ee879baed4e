//! Base trait for actions.

use std::fmt;

/// Type tag of the action a store dispatches while it is being created.
pub const INIT_ACTION_TYPE: &str = "@@INIT";

/// A tagged, immutable description of an intended state transition.
///
/// The vocabulary is open: reducers must absorb tags they do not know by
/// returning the input state unchanged.
pub trait Action: fmt::Debug + 'static {
    /// The action dispatched once during store construction.
    fn init() -> Self;

    /// The `type` discriminator of this action.
    fn action_type(&self) -> &str;
}
