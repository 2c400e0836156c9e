//! Rendered toast stack
//!
//! Reconciles queue snapshots with what is on screen. A toast that leaves the
//! queue is not dropped from the stack right away: it switches to `Exiting`
//! and keeps its slot until the exit animation reports back. A newer toast may
//! take that slot meanwhile; the two overlap, with the exiting one drawn
//! underneath every live toast.

use app_state::toast::{Notification, ToastId};

use super::layout::{StackLayout, ToastPlacement};
use super::presence::{ToastPhase, ToastPresence};
use super::style::{variant_style, VariantStyle};

/// One toast on screen
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    /// Toast data
    pub notification: Notification,
    /// Presentation phase
    pub presence: ToastPresence,
    slot: usize,
}

impl StackEntry {
    /// Toast id
    pub fn id(&self) -> &ToastId {
        &self.notification.id
    }

    /// Slot index (0 = newest)
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Variant styling
    pub fn style(&self) -> VariantStyle {
        variant_style(self.notification.variant)
    }
}

/// Toasts currently on screen, live ones first
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    entries: Vec<StackEntry>,
    layout: StackLayout,
}

impl ToastStack {
    /// Create an empty stack
    pub fn new(layout: StackLayout) -> Self {
        Self { entries: Vec::new(), layout }
    }

    /// Apply a queue snapshot (newest first)
    pub fn sync(&mut self, snapshot: &[Notification]) {
        let mut previous = std::mem::take(&mut self.entries);
        let mut next = Vec::with_capacity(snapshot.len() + previous.len());

        for (slot, notification) in snapshot.iter().enumerate() {
            let presence = previous
                .iter()
                .position(|e| e.id() == &notification.id && e.presence.is_live())
                .map(|pos| previous.swap_remove(pos).presence)
                .unwrap_or_default();
            next.push(StackEntry { notification: notification.clone(), presence, slot });
        }

        // Anything left was dismissed, expired or evicted
        previous.sort_by_key(|e| e.slot);
        for mut entry in previous {
            if entry.presence.is_live() {
                entry.presence.begin_exit();
                tracing::trace!(id = %entry.id(), "Toast exiting");
            }
            if entry.presence.phase() != ToastPhase::Removed {
                next.push(entry);
            }
        }

        self.entries = next;
    }

    fn entry_mut(&mut self, id: &ToastId) -> Option<&mut StackEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Entrance animation finished
    pub fn enter_finished(&mut self, id: &ToastId) -> bool {
        self.entry_mut(id).is_some_and(|e| e.presence.enter_finished())
    }

    /// Exit animation finished; drops the entry
    pub fn exit_finished(&mut self, id: &ToastId) -> bool {
        let finished = self.entry_mut(id).is_some_and(|e| e.presence.exit_finished());
        if finished {
            self.entries.retain(|e| e.id() != id);
        }
        finished
    }

    /// Entries in draw order
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Find an entry
    pub fn get(&self, id: &ToastId) -> Option<&StackEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Number of entries still in the queue
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.presence.is_live()).count()
    }

    /// Check if nothing is on screen
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where to draw a toast
    pub fn placement(&self, id: &ToastId) -> Option<ToastPlacement> {
        let entry = self.get(id)?;
        let mut placement = self.layout.placement(entry.slot);
        if !entry.presence.is_live() {
            placement.z_index -= self.entries.len() as i32;
        }
        Some(placement)
    }
}
