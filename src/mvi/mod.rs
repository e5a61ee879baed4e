//! Model-View-Intent (MVI) primitives.
//!
//! These traits describe the pieces of a unidirectional data flow:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listener (view)
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything a view needs
//! - **Action**: tagged description of an intended transition
//! - **Reducer**: pure function computing the next state
//!
//! The [`Store`](crate::store::Store) ties them together.

mod action;
mod reducer;
mod state;

pub use action::{Action, INIT_ACTION_TYPE};
pub use reducer::{reducer_fn, FnReducer, Reducer};
pub use state::State;
