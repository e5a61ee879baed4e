//! Single-owner state container.
//!
//! A [`Store`] owns exactly one state value, runs every dispatched action
//! through its reducer, and notifies its listeners after each transition.
//! Stores are constructed and passed explicitly; there is no global instance.

mod listeners;
mod state_store;

pub use listeners::Subscription;
pub use state_store::Store;
