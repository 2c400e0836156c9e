//! Debounced callbacks
//!
//! A [`Debouncer`] delays a callback until calls stop arriving for `delay`.
//! Each call cancels the pending one, so only the last value is delivered.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Default debounce delay for search input (300ms)
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debouncer errors
#[derive(Debug, Error)]
pub enum DebounceError {
    /// A non-zero delay needs a runtime to schedule on
    #[error("Debouncer created outside a tokio runtime")]
    NoRuntime,
}

/// Result type for debouncer construction
pub type Result<T> = std::result::Result<T, DebounceError>;

/// Delays a callback until input settles
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    runtime: Option<Handle>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer on the current tokio runtime
    ///
    /// A zero delay invokes the callback inline and needs no runtime.
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Result<Self> {
        let runtime = if delay.is_zero() {
            None
        } else {
            Some(Handle::try_current().map_err(|_| DebounceError::NoRuntime)?)
        };
        Ok(Self { delay, callback: Arc::new(callback), runtime, pending: Mutex::new(None) })
    }

    /// Create a debouncer scheduling on an explicit runtime
    pub fn with_runtime(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static, runtime: Handle) -> Self {
        Self { delay, callback: Arc::new(callback), runtime: Some(runtime), pending: Mutex::new(None) }
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the callback with `value`, replacing any pending call
    pub fn call(&self, value: T) {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let runtime = match &self.runtime {
            Some(runtime) if !self.delay.is_zero() => runtime,
            _ => {
                drop(pending);
                (self.callback)(value);
                return;
            }
        };

        // Abort, spawn and store under one lock so concurrent calls leave one task
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    /// Check if a call is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer").field("delay", &self.delay).finish_non_exhaustive()
    }
}
