use thiserror::Error;

/// Boxed error returned by a fallible updater
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a fallible write (see [`crate::Signal::try_update`])
#[derive(Error, Debug)]
pub enum SignalError {
    /// The updater returned an error. The value was left unchanged and no observer was notified.
    #[error("Updater failed: {0}")]
    Updater(BoxError),
    /// An observer panicked while being notified. The value stays committed and the
    /// observers registered after `index` were not notified of this write.
    #[error("Observer {index} panicked: {message}")]
    ObserverPanicked { index: usize, message: String },
}

impl SignalError {
    pub(crate) fn from_panic(index: usize, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            message.to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        SignalError::ObserverPanicked { index, message }
    }
}
