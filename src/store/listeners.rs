//! Listener registry for a store.

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// Pass it back to [`Store::unsubscribe`](super::Store::unsubscribe) to stop
/// receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Listeners in subscription order.
pub(crate) struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

impl<S> Listeners<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, listener: Listener<S>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        Subscription(id)
    }

    /// Returns `false` if the subscription was already removed.
    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        match self
            .entries
            .iter()
            .position(|(id, _)| *id == subscription.0)
        {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, state: &S) {
        for (_, listener) in self.entries.iter_mut() {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_runs_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            listeners.insert(Box::new(move |value: &u32| {
                log.borrow_mut().push(format!("{name}:{value}"))
            }));
        }

        listeners.notify(&7);

        assert_eq!(*log.borrow(), vec!["first:7", "second:7", "third:7"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let a = listeners.insert(Box::new(|_: &u32| {}));
        let b = listeners.insert(Box::new(|_: &u32| {}));
        assert_ne!(a, b);

        assert!(listeners.remove(a));
        assert!(!listeners.remove(a));
        assert_eq!(listeners.len(), 1);
    }
}
