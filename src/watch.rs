//! Change subscription
//!
//! The binder only declares the subscription options it wants; delivering
//! change notifications is the host's job. `Watched` is a minimal
//! single-threaded cell for hosts (and tests) without a reactive system of
//! their own.

use crate::error::PersistError;

/// Options passed through verbatim to the subscription facility.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    /// Invoke the callback once immediately upon subscription.
    pub immediate: bool,
    /// Compare values structurally when deciding whether a change occurred.
    pub deep: bool,
}

/// A change callback. Errors propagate to whoever triggered the change.
pub type WatchCallback<T> = Box<dyn FnMut(&T) -> Result<(), PersistError>>;

/// A field that can be assigned and watched.
pub trait ReactiveField<T> {
    /// Assign a new value, notifying existing subscribers.
    fn set(&mut self, value: T) -> Result<(), PersistError>;

    /// Register a change callback. With `immediate` set, the callback fires
    /// once with the current value before `subscribe` returns.
    fn subscribe(
        &mut self,
        callback: WatchCallback<T>,
        options: WatchOptions,
    ) -> Result<(), PersistError>;
}

struct Watcher<T> {
    callback: WatchCallback<T>,
    deep: bool,
}

/// Single-threaded change-notifying cell.
pub struct Watched<T> {
    value: T,
    watchers: Vec<Watcher<T>>,
}

impl<T: PartialEq> Watched<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            watchers: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> ReactiveField<T> for Watched<T> {
    fn set(&mut self, value: T) -> Result<(), PersistError> {
        let changed = value != self.value;
        self.value = value;
        for watcher in &mut self.watchers {
            // Deep watchers skip assignments that leave the value
            // structurally identical; shallow watchers fire on every
            // assignment.
            if changed || !watcher.deep {
                (watcher.callback)(&self.value)?;
            }
        }
        Ok(())
    }

    fn subscribe(
        &mut self,
        callback: WatchCallback<T>,
        options: WatchOptions,
    ) -> Result<(), PersistError> {
        let mut watcher = Watcher {
            callback,
            deep: options.deep,
        };
        // A failing immediate invocation aborts the subscription
        if options.immediate {
            (watcher.callback)(&self.value)?;
        }
        self.watchers.push(watcher);
        Ok(())
    }
}
