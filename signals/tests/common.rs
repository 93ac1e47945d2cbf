use std::sync::{Arc, Mutex};

/// Returns an accumulator closure and a check closure which drains everything accumulated so far
#[allow(unused)]
pub fn watcher<T: Send + 'static>() -> (impl Fn(T) + Send + Sync + Clone + 'static, impl Fn() -> Vec<T>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let accumulate = {
        let changes = changes.clone();
        move |value: T| changes.lock().unwrap().push(value)
    };
    let check = move || changes.lock().unwrap().drain(..).collect::<Vec<T>>();
    (accumulate, check)
}

#[allow(unused)]
pub fn init_tracing() { let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_test_writer().try_init(); }
