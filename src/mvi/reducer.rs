//! Reducer trait.

use std::fmt;
use std::marker::PhantomData;

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: `(Option<&State>, &Action) -> State`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Compute the next state.
    ///
    /// `state` is `None` only for the init action, before any state exists;
    /// implementations substitute `State::default()`. Unknown actions must
    /// return the input state unchanged.
    fn reduce(&self, state: Option<&Self::State>, action: &Self::Action) -> Self::State;
}

/// Reducer backed by a plain function or closure. See [`reducer_fn`].
pub struct FnReducer<S, A, F> {
    f: F,
    _marker: PhantomData<fn(Option<&S>, &A) -> S>,
}

/// Wrap a closure as a [`Reducer`].
///
/// ```
/// use ministore::counter::{CounterAction, CounterState};
/// use ministore::mvi::{reducer_fn, Reducer};
///
/// let reducer = reducer_fn(|state: Option<&CounterState>, action: &CounterAction| {
///     let state = state.cloned().unwrap_or_default();
///     match action {
///         CounterAction::IncreaseCount => CounterState { count: state.count + 10 },
///         _ => state,
///     }
/// });
/// let next = reducer.reduce(None, &CounterAction::IncreaseCount);
/// assert_eq!(next.count, 10);
/// ```
pub fn reducer_fn<S, A, F>(f: F) -> FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(Option<&S>, &A) -> S,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(Option<&S>, &A) -> S,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        (self.f)(state, action)
    }
}

impl<S, A, F> fmt::Debug for FnReducer<S, A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnReducer").finish_non_exhaustive()
    }
}
