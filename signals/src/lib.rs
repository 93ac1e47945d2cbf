/*!
A reactive value container: a [`Signal`] holds a value and tells its observers about every write.

# Design:
- Observers are called in the order they were attached, synchronously, before the write returns
- Attaching an observer immediately calls it with the present value
- Every write notifies, even if the value did not change
- Observers can not be detached
- Direct writes (`set`, `set_value`) and updater writes (`update`) are separate operations, and [`Update`] names either one

# Basic usage

```rust
use reactive_signal::*;
use std::sync::{Arc, Mutex};

let log = Arc::new(Mutex::new(Vec::new()));
let signal = Signal::new(0);
{
    let log = log.clone();
    signal.observe(move |value| log.lock().unwrap().push(*value));
}
assert_eq!(*log.lock().unwrap(), [0]);

signal.set(1);
signal.set_value(2);
signal.update(|prev| prev * 10);
assert_eq!(*log.lock().unwrap(), [0, 1, 2, 20]);
```

# Fallible writes

```rust
use reactive_signal::*;

let signal = Signal::new(200u8);
let result = signal.try_update(|prev| prev.checked_add(100).ok_or("overflow"));
assert!(matches!(result, Err(SignalError::Updater(_))));
assert_eq!(signal.get(), 200);
```

*/

mod error;
mod observer;
mod signal;
mod update;
mod value;

pub use error::*;
pub use observer::{IntoObserver, Observer};
pub use signal::*;
pub use update::*;
