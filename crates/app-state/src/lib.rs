//! Application state management for the wallet app
//!
//! This crate owns UI state that outlives a single screen: the toast
//! notification queue with its provider/handle pair, and debounced callbacks
//! used by search inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod debounce;
pub mod toast;

pub use debounce::{DebounceError, Debouncer, DEFAULT_DEBOUNCE};
pub use toast::{
    use_toast, Notification, NotificationInput, ToastConfig, ToastError, ToastEvent, ToastHandle,
    ToastId, ToastProvider, ToastQueue, ToastScope, ToastVariant,
};
