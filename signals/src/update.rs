/// A write to a signal: either a replacement value, or an updater deriving the next value from the present one.
///
/// Keeping the two forms apart in the type means a function-valued `T` is always stored as a value
/// (`Update::Value`) and never mistaken for an updater.
pub enum Update<T> {
    Value(T),
    With(Box<dyn FnOnce(&T) -> T + Send + 'static>),
}

impl<T> Update<T> {
    /// Create an updater write
    pub fn with<F>(f: F) -> Self
    where F: FnOnce(&T) -> T + Send + 'static {
        Update::With(Box::new(f))
    }

    /// Compute the next value from `current`
    pub fn resolve(self, current: &T) -> T {
        match self {
            Update::Value(value) => value,
            Update::With(f) => f(current),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self { Update::Value(value) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Update::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Update::With(_) => f.write_str("With(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve() {
        assert_eq!(Update::from(3).resolve(&10), 3);
        assert_eq!(Update::with(|prev: &i32| prev + 1).resolve(&10), 11);
    }

    #[test]
    fn function_values_are_not_invoked() {
        type Callback = fn(i32) -> i32;
        fn double(x: i32) -> i32 { x * 2 }
        fn negate(x: i32) -> i32 { -x }

        let update: Update<Callback> = Update::Value(negate);
        let next = update.resolve(&(double as Callback));
        assert_eq!(next(4), -4);
    }
}
