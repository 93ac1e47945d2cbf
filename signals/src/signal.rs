use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::{
    error::{BoxError, SignalError},
    observer::{IntoObserver, Observer, ObserverSet},
    update::Update,
    value::ValueCell,
};

/// A value together with the observers that are told about every write to it.
///
/// Cloning a `Signal` produces another handle to the same value and observers.
/// Every write notifies, even when the new value equals the old one.
pub struct Signal<T> {
    value: ValueCell<T>,
    observers: ObserverSet<T>,
    // Held from reading the present value until the last observer has returned.
    // Re-entrant so an observer may write to the signal it observes.
    gate: Arc<ReentrantMutex<()>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self { Self { value: self.value.clone(), observers: self.observers.clone(), gate: self.gate.clone() } }
}

impl<T> Signal<T> {
    /// Create a signal holding `value`, with no observers
    pub fn new(value: T) -> Self { Self::with_observers(value, []) }

    /// Create a signal with observers already attached. They are not called until the first write.
    pub fn with_observers<I>(value: T, observers: I) -> Self
    where I: IntoIterator<Item = Observer<T>> {
        Self {
            value: ValueCell::new(value),
            observers: ObserverSet::new(observers.into_iter().collect()),
            gate: Arc::new(ReentrantMutex::new(())),
        }
    }

    pub fn observer_count(&self) -> usize { self.observers.len() }
}

impl<T: Clone> Signal<T> {
    /// Returns a clone of the current value
    pub fn get(&self) -> T { self.value.value() }

    /// Same as [`Signal::get`]
    pub fn value(&self) -> T { self.value.value() }

    /// Calls a closure with a borrow of a snapshot of the current value.
    ///
    /// No lock is held while `f` runs, so `f` may write to this signal. The borrow is of the value
    /// present when `with` was called.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { f(&self.value.value()) }

    /// Attach an observer and immediately call it with the current value.
    ///
    /// The observer stays attached for the lifetime of the signal. If it panics during this first
    /// call, the panic propagates to the caller and the observer remains registered.
    pub fn observe<F>(&self, observer: F)
    where F: Fn(&T) + Send + Sync + 'static {
        self.observe_with(Observer::new(observer))
    }

    /// Like [`Signal::observe`], for anything convertible into an observer (e.g. channel senders)
    pub fn observe_with<O>(&self, observer: O)
    where O: IntoObserver<T> {
        let observer = observer.into_observer();
        let _gate = self.gate.lock();
        self.observers.push(observer.clone());
        tracing::trace!("Attached observer {}", self.observers.len() - 1);
        observer.notify(&self.value.value());
    }

    /// Replace the value and notify all observers.
    ///
    /// Returns the value stored once every observer has returned. This differs from `value` only when an
    /// observer wrote to the signal in the meantime.
    pub fn set(&self, value: T) -> T {
        let _gate = self.gate.lock();
        self.commit(value)
    }

    /// Replace the value with the result of `f` applied to the current value, then notify all observers.
    ///
    /// If `f` panics the value is left untouched and no observer is called.
    pub fn update<F>(&self, f: F) -> T
    where F: FnOnce(&T) -> T {
        let _gate = self.gate.lock();
        let next = f(&self.value.value());
        self.commit(next)
    }

    /// Perform either form of write
    pub fn apply<U>(&self, update: U) -> T
    where U: Into<Update<T>> {
        let update = update.into();
        self.update(move |current| update.resolve(current))
    }

    /// Fallible [`Signal::update`].
    ///
    /// An error from `f` leaves the value untouched and notifies nobody. A panicking observer does not unwind
    /// through this call: the value stays committed, the remaining observers are skipped and the panic is
    /// returned as [`SignalError::ObserverPanicked`].
    pub fn try_update<F, E>(&self, f: F) -> Result<T, SignalError>
    where
        F: FnOnce(&T) -> Result<T, E>,
        E: Into<BoxError>,
    {
        let _gate = self.gate.lock();
        let next = f(&self.value.value()).map_err(|e| SignalError::Updater(e.into()))?;
        tracing::trace!("Setting new value");
        self.value.set(next);
        self.observers.try_notify(&self.value)?;
        Ok(self.value.value())
    }

    /// Replace the value and notify all observers
    pub fn set_value(&self, value: T) { self.set(value); }

    fn commit(&self, value: T) -> T {
        tracing::trace!("Setting new value");
        self.value.set(value);
        self.observers.notify(&self.value);
        self.value.value()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T> From<T> for Signal<T> {
    fn from(value: T) -> Self { Self::new(value) }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_struct("Signal").field("value", value).field("observers", &self.observer_count()).finish())
    }
}

impl<T: Clone + std::fmt::Display> std::fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.with(|v| write!(f, "{}", v)) }
}
