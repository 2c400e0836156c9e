//! Toast overlay controller
//!
//! Glue between the queue and the rendering layer: pulls snapshots into a
//! [`ToastStack`] and turns close/action/swipe events into queue intents.

use app_state::toast::{
    Notification, Result, SwipeOutcome, ToastHandle, ToastId, ToastIntent,
};
use std::collections::HashMap;
use tokio::sync::watch;

use super::gesture::{SwipeGesture, SwipeThresholds};
use super::layout::StackLayout;
use super::stack::ToastStack;

/// Renderer-facing toast state
#[derive(Debug)]
pub struct ToastOverlay {
    toasts: ToastHandle,
    snapshots: watch::Receiver<Vec<Notification>>,
    stack: ToastStack,
    gestures: HashMap<ToastId, SwipeGesture>,
    viewport_width: f32,
    thresholds: SwipeThresholds,
}

impl ToastOverlay {
    /// Attach to a provider's queue
    pub fn new(
        toasts: ToastHandle,
        viewport_width: f32,
        layout: StackLayout,
        thresholds: SwipeThresholds,
    ) -> Result<Self> {
        let snapshots = toasts.subscribe()?;
        let mut overlay = Self {
            toasts,
            snapshots,
            stack: ToastStack::new(layout),
            gestures: HashMap::new(),
            viewport_width,
            thresholds,
        };
        overlay.refresh();
        Ok(overlay)
    }

    /// Pull the latest snapshot; returns `true` if the stack changed
    pub fn refresh(&mut self) -> bool {
        // A closed channel still holds the final (empty) snapshot
        let changed = self.snapshots.has_changed().unwrap_or(true);
        if !changed && !self.stack.is_empty() {
            return false;
        }

        let snapshot = self.snapshots.borrow_and_update().clone();
        self.stack.sync(&snapshot);
        self.gestures.retain(|id, _| snapshot.iter().any(|n| &n.id == id));
        changed
    }

    /// Current stack
    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    /// Mutable stack, for animation callbacks
    pub fn stack_mut(&mut self) -> &mut ToastStack {
        &mut self.stack
    }

    /// Drag moved on a toast; returns the opacity to draw it at
    ///
    /// `None` if the toast is not accepting gestures.
    pub fn drag(&mut self, id: &ToastId, translation_x: f32) -> Option<f32> {
        if !self.stack.get(id)?.presence.accepts_gestures() {
            return None;
        }
        let (width, thresholds) = (self.viewport_width, self.thresholds);
        let gesture = self
            .gestures
            .entry(id.clone())
            .or_insert_with(|| SwipeGesture::new(width, thresholds));
        Some(gesture.update(translation_x))
    }

    /// Drag released; dismisses through the queue if past threshold
    ///
    /// A release with no tracked drag is judged on velocity alone.
    pub fn release(&mut self, id: &ToastId, velocity_x: f32) -> Result<SwipeOutcome> {
        let accepts = self.stack.get(id).is_some_and(|e| e.presence.accepts_gestures());
        let tracked = self.gestures.remove(id);
        let outcome = match tracked {
            Some(mut gesture) if accepts => gesture.release(velocity_x),
            None if accepts => SwipeGesture::new(self.viewport_width, self.thresholds).release(velocity_x),
            _ => SwipeOutcome::SnapBack,
        };
        if outcome.is_dismiss() {
            self.toasts.handle_intent(id, ToastIntent::Swipe(outcome))?;
            self.refresh();
        }
        Ok(outcome)
    }

    /// Close button pressed
    pub fn close(&mut self, id: &ToastId) -> Result<bool> {
        let dismissed = self.toasts.handle_intent(id, ToastIntent::Close)?;
        self.refresh();
        Ok(dismissed)
    }

    /// Action button pressed
    pub fn press_action(&mut self, id: &ToastId) -> Result<bool> {
        let dismissed = self.toasts.handle_intent(id, ToastIntent::ActionPressed)?;
        self.refresh();
        Ok(dismissed)
    }
}
