//! User intents sent back from the rendering layer

use serde::{Deserialize, Serialize};

/// Horizontal swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Swiped towards the left edge
    Left,
    /// Swiped towards the right edge
    Right,
}

/// Result of releasing a swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeOutcome {
    /// Past the distance or velocity threshold: dismiss, sliding off this way
    Dismiss(SwipeDirection),
    /// Below both thresholds: reset position, keep the toast
    SnapBack,
}

impl SwipeOutcome {
    /// Whether this outcome dismisses the toast
    pub fn is_dismiss(&self) -> bool {
        matches!(self, SwipeOutcome::Dismiss(_))
    }
}

/// Something the user did to a rendered toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    /// Close button pressed
    Close,
    /// Action button pressed
    ActionPressed,
    /// Swipe gesture released
    Swipe(SwipeOutcome),
}

/// Why a toast left the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    /// `dismiss` called or close button pressed
    Manual,
    /// Auto-dismiss timer fired
    Expired,
    /// Swipe gesture past threshold
    Swipe,
    /// Action button pressed
    Action,
}
