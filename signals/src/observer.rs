use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, PoisonError, RwLock};

use crate::{error::SignalError, value::ValueCell};

/// A callback registered with a [`crate::Signal`]. Called with a borrow of the new value on every write,
/// and once with the present value when it is attached.
pub struct Observer<T>(Arc<dyn Fn(&T) + Send + Sync + 'static>);

impl<T> Observer<T> {
    /// Wrap a callback. The same `Observer` may be attached several times; each attachment is called separately.
    pub fn new<F>(f: F) -> Self
    where F: Fn(&T) + Send + Sync + 'static {
        Self(Arc::new(f))
    }

    pub(crate) fn notify(&self, value: &T) { (self.0)(value) }
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> std::fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_tuple("Observer").field(&Arc::as_ptr(&self.0)).finish() }
}

/// Ordered, append-only list of observers shared by all handles of a signal
pub(crate) struct ObserverSet<T>(Arc<RwLock<Vec<Observer<T>>>>);

impl<T> Clone for ObserverSet<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> ObserverSet<T> {
    pub fn new(observers: Vec<Observer<T>>) -> Self { Self(Arc::new(RwLock::new(observers))) }

    pub fn push(&self, observer: Observer<T>) { self.0.write().unwrap_or_else(PoisonError::into_inner).push(observer); }

    pub fn len(&self) -> usize { self.0.read().unwrap_or_else(PoisonError::into_inner).len() }

    /// Copy of the present observers, so no lock is held while callbacks run
    fn snapshot(&self) -> Vec<Observer<T>> { self.0.read().unwrap_or_else(PoisonError::into_inner).clone() }
}

impl<T: Clone> ObserverSet<T> {
    /// Calls every observer in registration order with the value stored at the time of its call, so an
    /// observer that writes to the signal is followed by observers seeing the newer value.
    /// A panicking observer unwinds through this call and the observers after it are not called.
    pub fn notify(&self, value: &ValueCell<T>) {
        let observers = self.snapshot();
        tracing::trace!("Notifying {} observers", observers.len());
        for observer in &observers {
            observer.notify(&value.value());
        }
    }

    /// Like `notify`, but a panicking observer is reported as an error instead of unwinding
    pub fn try_notify(&self, value: &ValueCell<T>) -> Result<(), SignalError> {
        let observers = self.snapshot();
        tracing::trace!("Notifying {} observers", observers.len());
        for (index, observer) in observers.iter().enumerate() {
            let current = value.value();
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| observer.notify(&current))) {
                let err = SignalError::from_panic(index, payload);
                tracing::warn!("Aborting notification: {err}");
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Trait for types that can be converted into observers
pub trait IntoObserver<T> {
    fn into_observer(self) -> Observer<T>;
}

impl<T> IntoObserver<T> for Observer<T> {
    fn into_observer(self) -> Observer<T> { self }
}

// Implementations for converting closures to Observer<T>
impl<F, T> IntoObserver<T> for F
where F: Fn(&T) + Send + Sync + 'static
{
    fn into_observer(self) -> Observer<T> { Observer::new(self) }
}

// IntoObserver implementation for std::sync::mpsc channels
// A disconnected receiver is not an error; the sender simply stops delivering.
impl<T: Clone + Send + 'static> IntoObserver<T> for std::sync::mpsc::Sender<T> {
    fn into_observer(self) -> Observer<T> {
        Observer::new(move |value: &T| {
            let _ = self.send(value.clone());
        })
    }
}

// IntoObserver implementation for tokio channels
#[cfg(feature = "tokio")]
impl<T: Clone + Send + 'static> IntoObserver<T> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_observer(self) -> Observer<T> {
        Observer::new(move |value: &T| {
            let _ = self.send(value.clone());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_sender_forwards_clones() {
        let (tx, rx) = std::sync::mpsc::channel();
        let observer: Observer<String> = tx.into_observer();
        observer.notify(&"a".to_string());
        observer.notify(&"b".to_string());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn dropped_receiver_is_ignored() {
        let (tx, rx) = std::sync::mpsc::channel::<u8>();
        let observer = tx.into_observer();
        drop(rx);
        observer.notify(&1);
    }
}
