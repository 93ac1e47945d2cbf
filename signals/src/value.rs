use std::sync::{Arc, PoisonError, RwLock};

/// Shared storage for a signal's present value.
///
/// User code never runs while the write lock is held, so a poisoned lock still holds a
/// consistent value and is recovered rather than propagated.
pub struct ValueCell<T>(Arc<RwLock<T>>);

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> ValueCell<T> {
    pub fn new(value: T) -> Self { Self(Arc::new(RwLock::new(value))) }

    pub fn set(&self, value: T) {
        let mut current = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *current = value;
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}

impl<T: Clone> ValueCell<T> {
    pub fn value(&self) -> T { self.with(T::clone) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let cell = ValueCell::new(1);
        let other = cell.clone();
        other.set(2);
        assert_eq!(cell.value(), 2);
        assert_eq!(cell.with(|v| v * 10), 20);
    }
}
