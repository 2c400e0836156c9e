//! Toast provider and consumer handles
//!
//! The [`ToastProvider`] is mounted once at the root of the UI tree and owns
//! the only [`ToastQueue`]. Everything below it gets a [`ToastHandle`], either
//! directly or by looking it up in a [`ToastScope`]. Handles never keep the
//! queue alive: once the provider unmounts they fail fast.

use std::sync::{Arc, Weak};
use tokio::sync::{broadcast, watch};

use super::config::ToastConfig;
use super::id::{IdGenerator, SequentialIds};
use super::intent::{DismissReason, ToastIntent};
use super::notification::{Notification, NotificationInput, ToastId, ToastVariant};
use super::queue::{QueueInner, ToastEvent, ToastQueue};
use super::{Result, ToastError};

/// Root owner of the toast queue
#[derive(Debug)]
pub struct ToastProvider {
    queue: ToastQueue,
}

impl ToastProvider {
    /// Mount a provider on the current tokio runtime
    pub fn mount(config: ToastConfig) -> Result<Self> {
        Self::mount_with_ids(config, SequentialIds::new())
    }

    /// Mount a provider with a custom id source
    pub fn mount_with_ids(config: ToastConfig, ids: impl IdGenerator + 'static) -> Result<Self> {
        let queue = ToastQueue::with_id_generator(config, ids)?;
        tracing::debug!(max_toasts = queue.config().max_toasts, "Toast provider mounted");
        Ok(Self { queue })
    }

    /// Get a consumer handle
    pub fn handle(&self) -> ToastHandle {
        ToastHandle { queue: self.queue.downgrade() }
    }

    /// Get a scope carrying this provider's handle
    pub fn scope(&self) -> ToastScope {
        ToastScope { handle: Some(self.handle()) }
    }

    /// Borrow the owned queue
    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    /// Tear down: cancel every timer and invalidate all handles
    pub fn unmount(self) {
        tracing::debug!("Toast provider unmounted");
        // Dropping the queue cancels timers
    }
}

/// Context slot that may or may not sit under a provider
#[derive(Debug, Clone, Default)]
pub struct ToastScope {
    handle: Option<ToastHandle>,
}

impl ToastScope {
    /// A scope with no provider above it
    pub fn detached() -> Self {
        Self::default()
    }
}

/// Look up the toast handle from a scope
///
/// Fails with [`ToastError::OutsideProvider`] when no provider was mounted
/// above the scope.
pub fn use_toast(scope: &ToastScope) -> Result<ToastHandle> {
    scope.handle.clone().ok_or_else(|| {
        tracing::warn!("use_toast called outside of a ToastProvider");
        ToastError::OutsideProvider
    })
}

/// Consumer handle to the provider's queue
///
/// Mirrors the [`ToastQueue`] API; every call fails with
/// [`ToastError::ProviderUnmounted`] once the provider is gone.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    queue: Weak<QueueInner>,
}

impl ToastHandle {
    fn queue(&self) -> Result<Arc<QueueInner>> {
        self.queue.upgrade().ok_or_else(|| {
            tracing::warn!("Toast handle used after provider unmounted");
            ToastError::ProviderUnmounted
        })
    }

    /// Check if the provider is still mounted
    pub fn is_mounted(&self) -> bool {
        self.queue.strong_count() > 0
    }

    /// Show a toast
    pub fn toast(&self, input: NotificationInput) -> Result<ToastId> {
        Ok(self.queue()?.enqueue(input))
    }

    fn variant(&self, variant: ToastVariant, title: &str, description: Option<&str>) -> Result<ToastId> {
        self.toast(NotificationInput::with_variant(variant, title, description))
    }

    /// Show a success toast
    pub fn success(&self, title: &str, description: Option<&str>) -> Result<ToastId> {
        self.variant(ToastVariant::Success, title, description)
    }

    /// Show an error toast
    pub fn error(&self, title: &str, description: Option<&str>) -> Result<ToastId> {
        self.variant(ToastVariant::Error, title, description)
    }

    /// Show a warning toast
    pub fn warning(&self, title: &str, description: Option<&str>) -> Result<ToastId> {
        self.variant(ToastVariant::Warning, title, description)
    }

    /// Show an info toast
    pub fn info(&self, title: &str, description: Option<&str>) -> Result<ToastId> {
        self.variant(ToastVariant::Info, title, description)
    }

    /// Dismiss a toast; unknown ids are ignored
    pub fn dismiss(&self, id: &ToastId) -> Result<bool> {
        Ok(self.queue()?.dismiss(id, DismissReason::Manual))
    }

    /// Dismiss every toast
    pub fn dismiss_all(&self) -> Result<()> {
        self.queue()?.dismiss_all();
        Ok(())
    }

    /// Apply a user intent from the rendering layer
    pub fn handle_intent(&self, id: &ToastId, intent: ToastIntent) -> Result<bool> {
        Ok(self.queue()?.handle_intent(id, intent))
    }

    /// Active toasts, newest first
    pub fn snapshot(&self) -> Result<Vec<Notification>> {
        Ok(self.queue()?.snapshot())
    }

    /// Subscribe to snapshots of the active set
    pub fn subscribe(&self) -> Result<watch::Receiver<Vec<Notification>>> {
        Ok(self.queue()?.subscribe())
    }

    /// Subscribe to ordered change events
    pub fn subscribe_events(&self) -> Result<broadcast::Receiver<ToastEvent>> {
        Ok(self.queue()?.subscribe_events())
    }
}
