//! Toast notification state
//!
//! A bounded, newest-first queue of transient notifications with per-toast
//! auto-dismiss timers, exposed to the UI tree through a provider/handle pair.
//!
//! - [`ToastQueue`] - the queue itself, timers and subscriptions
//! - [`ToastProvider`] / [`ToastHandle`] - explicit root ownership and consumer access
//! - [`Notification`] / [`NotificationInput`] - the data model
//! - [`IdGenerator`] - injectable id source

mod config;
mod id;
mod intent;
mod notification;
mod provider;
mod queue;

pub use config::{ToastConfig, DEFAULT_MAX_TOASTS, DEFAULT_TOAST_DURATION_MS};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use intent::{DismissReason, SwipeDirection, SwipeOutcome, ToastIntent};
pub use notification::{Notification, NotificationInput, ToastAction, ToastId, ToastVariant};
pub use provider::{use_toast, ToastHandle, ToastProvider, ToastScope};
pub use queue::{ToastEvent, ToastQueue};

/// Toast usage errors
#[derive(Debug, thiserror::Error)]
pub enum ToastError {
    /// Toast API used with no provider mounted above
    #[error("Toast API used outside of a ToastProvider")]
    OutsideProvider,

    /// Handle used after its provider was torn down
    #[error("ToastProvider has been unmounted")]
    ProviderUnmounted,

    /// No tokio runtime to drive auto-dismiss timers
    #[error("No tokio runtime available for toast timers")]
    NoRuntime,

    /// Config values out of range
    #[error("Invalid toast config: {0}")]
    InvalidConfig(String),

    /// Config could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for toast operations
pub type Result<T> = std::result::Result<T, ToastError>;
