//! Counter feature module.
//!
//! A single `count` incremented by a button.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - `CounterState { count }`
//! - `action.rs` - `@@INIT`, `INCREASE_COUNT`, and any other tag
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Text rendering of the counter component

mod action;
mod reducer;
mod state;
mod view;

pub use action::{CounterAction, INCREASE_COUNT};
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{CounterView, DEFAULT_BUTTON_LABEL};
