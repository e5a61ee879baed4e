//! Reducer for the counter.

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Increments on `INCREASE_COUNT`; every other action is the identity.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: Option<&CounterState>, action: &CounterAction) -> CounterState {
        let state = state.copied().unwrap_or_default();
        match action {
            CounterAction::IncreaseCount => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::Init | CounterAction::Other(_) => state,
        }
    }
}
