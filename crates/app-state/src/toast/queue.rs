//! Toast queue
//!
//! Holds the ordered list of active toasts (newest first) and one auto-dismiss
//! timer per toast. Every mutation publishes a fresh snapshot and an ordered
//! [`ToastEvent`] before returning.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use super::config::ToastConfig;
use super::id::{IdGenerator, SequentialIds};
use super::intent::{DismissReason, ToastIntent};
use super::notification::{Notification, NotificationInput, ToastId, ToastVariant};
use super::{Result, ToastError};

/// Capacity of the event broadcast channel
const EVENT_BUFFER: usize = 64;

/// Events broadcast when the active set changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    /// A toast was inserted at the head
    Enqueued(ToastId),
    /// A toast was removed
    Dismissed {
        /// Removed toast
        id: ToastId,
        /// What removed it
        reason: DismissReason,
    },
    /// The oldest toast was dropped to make room for a new one
    Evicted(ToastId),
    /// Every toast was removed at once
    Cleared,
}

#[derive(Default)]
struct QueueState {
    /// Active toasts, newest first
    toasts: VecDeque<Notification>,
    /// Pending auto-dismiss timers
    timers: HashMap<ToastId, JoinHandle<()>>,
}

impl QueueState {
    fn cancel_timer(&mut self, id: &ToastId) {
        if let Some(timer) = self.timers.remove(id) {
            timer.abort();
        }
    }

    fn cancel_all_timers(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }

    fn snapshot(&self) -> Vec<Notification> {
        self.toasts.iter().cloned().collect()
    }
}

pub(crate) struct QueueInner {
    config: ToastConfig,
    ids: Box<dyn IdGenerator>,
    runtime: Handle,
    state: Mutex<QueueState>,
    snapshot_tx: watch::Sender<Vec<Notification>>,
    events_tx: broadcast::Sender<ToastEvent>,
}

impl QueueInner {
    pub(crate) fn enqueue(self: &Arc<Self>, input: NotificationInput) -> ToastId {
        let id = self.ids.next_id();
        let notification = Notification::from_input(id.clone(), input, self.config.default_duration_ms);
        let duration_ms = notification.duration_ms;

        let mut state = self.state.lock();
        tracing::debug!(
            id = %id,
            variant = notification.variant.as_str(),
            duration_ms,
            "Enqueue toast"
        );
        state.toasts.push_front(notification);
        self.emit(ToastEvent::Enqueued(id.clone()));

        while state.toasts.len() > self.config.max_toasts {
            if let Some(evicted) = state.toasts.pop_back() {
                state.cancel_timer(&evicted.id);
                tracing::debug!(id = %evicted.id, "Evict oldest toast");
                self.emit(ToastEvent::Evicted(evicted.id));
            }
        }

        if duration_ms > 0 {
            let timer = self.schedule_expiry(id.clone(), duration_ms);
            state.timers.insert(id.clone(), timer);
        }

        self.publish(&state);
        id
    }

    pub(crate) fn dismiss(&self, id: &ToastId, reason: DismissReason) -> bool {
        let mut state = self.state.lock();
        state.cancel_timer(id);

        let Some(pos) = state.toasts.iter().position(|t| &t.id == id) else {
            return false;
        };
        state.toasts.remove(pos);
        tracing::debug!(id = %id, ?reason, "Dismiss toast");
        self.emit(ToastEvent::Dismissed { id: id.clone(), reason });
        self.publish(&state);
        true
    }

    pub(crate) fn dismiss_all(&self) {
        let mut state = self.state.lock();
        state.cancel_all_timers();
        if state.toasts.is_empty() {
            return;
        }
        tracing::debug!(count = state.toasts.len(), "Dismiss all toasts");
        state.toasts.clear();
        self.emit(ToastEvent::Cleared);
        self.publish(&state);
    }

    pub(crate) fn handle_intent(&self, id: &ToastId, intent: ToastIntent) -> bool {
        match intent {
            ToastIntent::Close => self.dismiss(id, DismissReason::Manual),
            ToastIntent::Swipe(outcome) if outcome.is_dismiss() => self.dismiss(id, DismissReason::Swipe),
            ToastIntent::Swipe(_) => false,
            ToastIntent::ActionPressed => {
                let action = {
                    let state = self.state.lock();
                    state.toasts.iter().find(|t| &t.id == id).and_then(|t| t.action.clone())
                };
                // Callback runs unlocked so it may enqueue or dismiss itself.
                // Either way the toast is gone once the press is handled.
                match action {
                    Some(action) => {
                        action.press();
                        self.dismiss(id, DismissReason::Action);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<Notification> {
        self.state.lock().snapshot()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().toasts.len()
    }

    pub(crate) fn contains(&self, id: &ToastId) -> bool {
        self.state.lock().toasts.iter().any(|t| &t.id == id)
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.state.lock().timers.len()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.snapshot_tx.subscribe()
    }

    pub(crate) fn subscribe_events(&self) -> broadcast::Receiver<ToastEvent> {
        self.events_tx.subscribe()
    }

    pub(crate) fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn shutdown(&self) {
        let mut state = self.state.lock();
        let outstanding = state.timers.len();
        state.cancel_all_timers();
        if !state.toasts.is_empty() {
            state.toasts.clear();
            self.emit(ToastEvent::Cleared);
        }
        tracing::debug!(outstanding, "Toast queue shut down");
        self.publish(&state);
    }

    fn expire(&self, id: &ToastId) {
        tracing::trace!(id = %id, "Toast timer fired");
        {
            // The firing task is the one in the map; drop the handle without aborting.
            let mut state = self.state.lock();
            state.timers.remove(id);
        }
        self.dismiss(id, DismissReason::Expired);
    }

    fn schedule_expiry(self: &Arc<Self>, id: ToastId, duration_ms: u64) -> JoinHandle<()> {
        let queue = Arc::downgrade(self);
        self.runtime.spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            if let Some(queue) = queue.upgrade() {
                queue.expire(&id);
            }
        })
    }

    fn publish(&self, state: &QueueState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    fn emit(&self, event: ToastEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }
}

/// Bounded toast queue with auto-dismiss timers
///
/// Normally owned by a [`ToastProvider`](super::ToastProvider); consumers
/// reach it through a [`ToastHandle`](super::ToastHandle). Dropping the queue
/// cancels every outstanding timer.
///
/// # Example
///
/// ```no_run
/// use app_state::toast::{NotificationInput, ToastConfig, ToastQueue};
///
/// #[tokio::main]
/// async fn main() {
///     let queue = ToastQueue::new(ToastConfig::default()).unwrap();
///     let id = queue.success("Saved", Some("Changes saved"));
///     assert!(queue.contains(&id));
///     queue.dismiss(&id);
///     assert!(queue.is_empty());
/// }
/// ```
pub struct ToastQueue {
    inner: Arc<QueueInner>,
}

impl ToastQueue {
    /// Create a queue on the current tokio runtime with sequential ids
    pub fn new(config: ToastConfig) -> Result<Self> {
        Self::with_id_generator(config, SequentialIds::new())
    }

    /// Create a queue on the current tokio runtime with a custom id source
    pub fn with_id_generator(config: ToastConfig, ids: impl IdGenerator + 'static) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| ToastError::NoRuntime)?;
        Ok(Self::with_runtime(config, ids, runtime))
    }

    /// Create a queue whose timers run on the given runtime
    pub fn with_runtime(config: ToastConfig, ids: impl IdGenerator + 'static, runtime: Handle) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);
        let config = ToastConfig { max_toasts: config.max_toasts.max(1), ..config };

        Self {
            inner: Arc::new(QueueInner {
                config,
                ids: Box::new(ids),
                runtime,
                state: Mutex::new(QueueState::default()),
                snapshot_tx,
                events_tx,
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> std::sync::Weak<QueueInner> {
        Arc::downgrade(&self.inner)
    }

    /// Add a toast at the head, evicting the oldest beyond capacity
    pub fn enqueue(&self, input: NotificationInput) -> ToastId {
        self.inner.enqueue(input)
    }

    /// Show a success toast
    pub fn success(&self, title: &str, description: Option<&str>) -> ToastId {
        self.enqueue(NotificationInput::with_variant(ToastVariant::Success, title, description))
    }

    /// Show an error toast
    pub fn error(&self, title: &str, description: Option<&str>) -> ToastId {
        self.enqueue(NotificationInput::with_variant(ToastVariant::Error, title, description))
    }

    /// Show a warning toast
    pub fn warning(&self, title: &str, description: Option<&str>) -> ToastId {
        self.enqueue(NotificationInput::with_variant(ToastVariant::Warning, title, description))
    }

    /// Show an info toast
    pub fn info(&self, title: &str, description: Option<&str>) -> ToastId {
        self.enqueue(NotificationInput::with_variant(ToastVariant::Info, title, description))
    }

    /// Remove a toast and cancel its timer
    ///
    /// Returns `true` if the toast was active. Unknown ids are ignored.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        self.inner.dismiss(id, DismissReason::Manual)
    }

    /// Remove every toast and cancel every timer
    pub fn dismiss_all(&self) {
        self.inner.dismiss_all();
    }

    /// Apply a user intent from the rendering layer
    ///
    /// Returns `true` if the toast was dismissed as a result. A pressed
    /// action always counts, even when its callback removed the toast first;
    /// `DismissReason::Action` is only emitted if the toast was still there.
    pub fn handle_intent(&self, id: &ToastId, intent: ToastIntent) -> bool {
        self.inner.handle_intent(id, intent)
    }

    /// Active toasts, newest first
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.snapshot()
    }

    /// Number of active toasts
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no toast is active
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a toast is active
    pub fn contains(&self, id: &ToastId) -> bool {
        self.inner.contains(id)
    }

    /// Number of scheduled auto-dismiss timers
    pub fn pending_timers(&self) -> usize {
        self.inner.pending_timers()
    }

    /// Subscribe to snapshots of the active set
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.subscribe()
    }

    /// Subscribe to ordered change events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.subscribe_events()
    }

    /// Queue configuration
    pub fn config(&self) -> &ToastConfig {
        self.inner.config()
    }

    /// Cancel all timers and clear the active set
    pub fn shutdown(&self) {
        self.inner.shutdown();
    }
}

impl Drop for ToastQueue {
    fn drop(&mut self) {
        self.inner.shutdown();
    }
}

impl std::fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastQueue")
            .field("config", &self.inner.config)
            .field("len", &self.len())
            .finish()
    }
}
