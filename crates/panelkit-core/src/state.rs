//! Observable state cells
//!
//! A [`Signal`] is a shared value with change subscribers. Cloning a signal
//! shares the cell, so owners that need independent state must create a new
//! signal instead of cloning.

use parking_lot::RwLock;
use smallvec::SmallVec;
use std::sync::Arc;

/// Callback invoked with the new value after every change
pub type SignalCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Shared observable value
pub struct Signal<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<SmallVec<[SignalCallback<T>; 2]>>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with initial value
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Get current value
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Set new value and notify subscribers
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.notify(&value);
    }

    /// Update value with a function
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let value = {
            let mut guard = self.value.write();
            f(&mut *guard);
            guard.clone()
        };
        self.notify(&value);
    }

    /// Subscribe to value changes
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers.write().push(Arc::new(callback));
    }

    /// Whether two signals share the same cell
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Callbacks run on a snapshot taken without the lock held, so they may
    /// subscribe or set again. Subscribers added during a notification are
    /// called from the next change on.
    fn notify(&self, value: &T) {
        let subscribers = self.subscribers.read().clone();
        for subscriber in subscribers.iter() {
            subscriber(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read())
            .field("subscribers", &self.subscribers.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_signal_set_and_get() {
        let signal = Signal::new(String::from("Idle"));
        signal.set("Running".to_string());
        assert_eq!(signal.get(), "Running");
        assert_eq!(signal.with(|s| s.len()), 7);
    }

    #[test]
    fn test_signal_update_notifies() {
        let signal = Signal::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        signal.subscribe(move |v| {
            assert_eq!(*v, 2);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        signal.update(|v| *v += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_shares_cell() {
        let signal = Signal::new(false);
        let clone = signal.clone();
        clone.set(true);
        assert!(signal.get());
        assert!(signal.ptr_eq(&clone));
        assert!(!signal.ptr_eq(&Signal::new(true)));
    }

    #[test]
    fn test_subscribe_from_callback() {
        let signal = Signal::new(0);
        let inner_calls = Arc::new(AtomicUsize::new(0));

        let handle = signal.clone();
        let counter = Arc::clone(&inner_calls);
        signal.subscribe(move |_| {
            let counter = Arc::clone(&counter);
            handle.subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        signal.set(1);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 0);
        assert_eq!(signal.subscribers.read().len(), 2);

        signal.set(2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.subscribers.read().len(), 3);
    }

    #[test]
    fn test_set_from_callback() {
        let signal = Signal::new(0);
        let handle = signal.clone();
        signal.subscribe(move |v| {
            if *v < 3 {
                handle.set(*v + 1);
            }
        });

        signal.set(1);
        assert_eq!(signal.get(), 3);
    }
}
