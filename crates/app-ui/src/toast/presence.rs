//! Per-toast presence state machine
//!
//! `Entering -> Visible -> Exiting -> Removed`. Entering and exiting are pure
//! animation phases; only a visible toast responds to swipes.

use serde::{Deserialize, Serialize};

use crate::tokens::{duration, easing};

/// Presentation phase of a rendered toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    /// Entrance animation running
    #[default]
    Entering,
    /// Fully shown
    Visible,
    /// Exit animation running
    Exiting,
    /// Gone; safe to drop
    Removed,
}

/// Animation attached to a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAnimation {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// CSS-style easing curve
    pub easing: &'static str,
}

impl ToastPhase {
    /// Animation to run while in this phase, if any
    pub fn animation(&self) -> Option<PhaseAnimation> {
        match self {
            ToastPhase::Entering => {
                Some(PhaseAnimation { duration_ms: duration::TOAST_ENTER, easing: easing::TOAST_ENTER })
            }
            ToastPhase::Exiting => {
                Some(PhaseAnimation { duration_ms: duration::TOAST_EXIT, easing: easing::TOAST_EXIT })
            }
            ToastPhase::Visible | ToastPhase::Removed => None,
        }
    }
}

/// Phase tracker for one toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastPresence {
    phase: ToastPhase,
}

impl ToastPresence {
    /// Start entering
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Entrance animation done. Only valid while entering.
    pub fn enter_finished(&mut self) -> bool {
        self.transition(ToastPhase::Entering, ToastPhase::Visible)
    }

    /// Start the exit animation
    ///
    /// Allowed from entering or visible; a toast dismissed mid-entrance exits
    /// straight away.
    pub fn begin_exit(&mut self) -> bool {
        match self.phase {
            ToastPhase::Entering | ToastPhase::Visible => {
                self.phase = ToastPhase::Exiting;
                true
            }
            ToastPhase::Exiting | ToastPhase::Removed => false,
        }
    }

    /// Exit animation done. Only valid while exiting.
    pub fn exit_finished(&mut self) -> bool {
        self.transition(ToastPhase::Exiting, ToastPhase::Removed)
    }

    /// Whether drag gestures should be attached
    pub fn accepts_gestures(&self) -> bool {
        self.phase == ToastPhase::Visible
    }

    /// Whether the toast still occupies a slot in the stack
    pub fn is_live(&self) -> bool {
        matches!(self.phase, ToastPhase::Entering | ToastPhase::Visible)
    }

    fn transition(&mut self, from: ToastPhase, to: ToastPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let mut presence = ToastPresence::new();
        assert_eq!(presence.phase(), ToastPhase::Entering);
        assert!(!presence.accepts_gestures());

        assert!(presence.enter_finished());
        assert_eq!(presence.phase(), ToastPhase::Visible);
        assert!(presence.accepts_gestures());

        assert!(presence.begin_exit());
        assert_eq!(presence.phase(), ToastPhase::Exiting);
        assert!(!presence.accepts_gestures());
        assert!(!presence.is_live());

        assert!(presence.exit_finished());
        assert_eq!(presence.phase(), ToastPhase::Removed);
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        let mut presence = ToastPresence::new();
        assert!(!presence.exit_finished());

        presence.enter_finished();
        assert!(!presence.enter_finished());

        presence.begin_exit();
        assert!(!presence.begin_exit());
        assert!(!presence.enter_finished());

        presence.exit_finished();
        assert!(!presence.begin_exit());
        assert_eq!(presence.phase(), ToastPhase::Removed);
    }

    #[test]
    fn test_exit_during_entrance() {
        let mut presence = ToastPresence::new();
        assert!(presence.begin_exit());
        assert!(!presence.enter_finished());
        assert!(presence.exit_finished());
    }

    #[test]
    fn test_phase_animations() {
        assert_eq!(ToastPhase::Entering.animation().unwrap().duration_ms, 350);
        assert_eq!(ToastPhase::Exiting.animation().unwrap().duration_ms, 300);
        assert!(ToastPhase::Visible.animation().is_none());
        assert!(ToastPhase::Removed.animation().is_none());
    }
}
