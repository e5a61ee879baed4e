//! State for the counter.

use serde::{Deserialize, Serialize};

use crate::mvi::State;

/// The counter value. Defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: u64,
}

impl State for CounterState {}
