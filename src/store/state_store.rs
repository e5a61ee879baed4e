use std::fmt;
use std::sync::Arc;

use crate::mvi::{Action, Reducer};

use super::listeners::{Listeners, Subscription};

/// Holds the current state and the reducer that produces the next one.
///
/// Lifecycle: the store is `ready` as soon as construction returns. The
/// constructor dispatches [`Action::init`] exactly once, so an
/// uninitialized store is never observable.
///
/// `dispatch` takes `&mut self`: concurrent dispatch and dispatch from
/// inside a listener are rejected at compile time.
///
/// # Reducer failure
///
/// The reducer borrows the current state and its result is committed only
/// after it returns. If it panics, the panic propagates to the caller of
/// [`Store::dispatch`], the state and dispatch count stay as they were, and
/// no listener runs.
pub struct Store<R: Reducer> {
    reducer: R,
    state: Arc<R::State>,
    listeners: Listeners<R::State>,
    dispatch_count: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store and establish its initial state with the init action.
    pub fn new(reducer: R) -> Self {
        Self::with_listeners(reducer, Listeners::new())
    }

    /// Create a store with a listener registered before the init action,
    /// so the listener observes the initial state too.
    pub fn with_listener<F>(reducer: R, listener: F) -> Self
    where
        F: FnMut(&R::State) + 'static,
    {
        let mut listeners = Listeners::new();
        listeners.insert(Box::new(listener));
        Self::with_listeners(reducer, listeners)
    }

    fn with_listeners(reducer: R, listeners: Listeners<R::State>) -> Self {
        let init = R::Action::init();
        let state = Arc::new(reducer.reduce(None, &init));
        let mut store = Self {
            reducer,
            state,
            listeners,
            dispatch_count: 0,
        };
        store.finish_transition(&init);
        store
    }

    /// Run `action` through the reducer, replace the state, then notify
    /// every listener once, in subscription order.
    ///
    /// Unknown action types are not rejected here; the reducer absorbs them.
    pub fn dispatch(&mut self, action: R::Action) {
        let next = self.reducer.reduce(Some(self.state.as_ref()), &action);
        self.state = Arc::new(next);
        self.finish_transition(&action);
    }

    fn finish_transition(&mut self, action: &R::Action) {
        self.dispatch_count += 1;
        tracing::debug!(
            action = action.action_type(),
            state = ?self.state,
            dispatch_count = self.dispatch_count,
            "Action dispatched"
        );
        self.listeners.notify(&self.state);
    }

    /// Shared handle to the current state.
    ///
    /// Every transition allocates a new value, so a handle taken before a
    /// dispatch keeps pointing at the old state.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state)
    }

    /// Borrowed view of the current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Register a listener called after every subsequent dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of completed dispatches, including the init action.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatch_count", &self.dispatch_count)
            .finish_non_exhaustive()
    }
}
