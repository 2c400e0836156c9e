//! Swipe-to-dismiss gesture
//!
//! Tracks horizontal drag on one toast and decides on release whether the
//! drag means "dismiss" or should snap back.

use app_state::toast::{SwipeDirection, SwipeOutcome};
use serde::{Deserialize, Serialize};

use super::presence::PhaseAnimation;
use crate::tokens::{duration, easing};

/// Drag distance over which opacity feedback reaches its floor
const FEEDBACK_DISTANCE: f32 = 300.0;

/// Lowest opacity while dragging
const MIN_DRAG_OPACITY: f32 = 0.3;

/// Animation back to rest after a cancelled swipe
pub const SNAP_BACK: PhaseAnimation =
    PhaseAnimation { duration_ms: duration::TOAST_FADE, easing: easing::EASE_OUT_CUBIC };

/// Dismiss thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeThresholds {
    /// Fraction of the viewport width the toast must travel
    pub distance_fraction: f32,
    /// Release speed in px/s
    pub velocity: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self { distance_fraction: 0.2, velocity: 600.0 }
    }
}

/// Drag state for one toast
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGesture {
    thresholds: SwipeThresholds,
    viewport_width: f32,
    translation_x: f32,
}

impl SwipeGesture {
    /// Start tracking on a viewport of the given width
    pub fn new(viewport_width: f32, thresholds: SwipeThresholds) -> Self {
        Self { thresholds, viewport_width, translation_x: 0.0 }
    }

    /// Distance past which a release dismisses
    pub fn distance_threshold(&self) -> f32 {
        self.viewport_width * self.thresholds.distance_fraction
    }

    /// Current horizontal offset
    pub fn translation_x(&self) -> f32 {
        self.translation_x
    }

    /// Drag moved; returns opacity to render at
    pub fn update(&mut self, translation_x: f32) -> f32 {
        self.translation_x = translation_x;
        let progress = translation_x.abs() / FEEDBACK_DISTANCE;
        (1.0 - progress * 0.7).max(MIN_DRAG_OPACITY)
    }

    /// Drag released at `velocity_x` px/s
    ///
    /// Resets the offset; the caller animates either off-screen or back.
    pub fn release(&mut self, velocity_x: f32) -> SwipeOutcome {
        let translation_x = std::mem::take(&mut self.translation_x);

        if translation_x.abs() > self.distance_threshold() || velocity_x.abs() > self.thresholds.velocity {
            // Direction follows the drag; a flick with no travel follows the velocity
            let toward = if translation_x != 0.0 { translation_x } else { velocity_x };
            let direction = if toward > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left };
            SwipeOutcome::Dismiss(direction)
        } else {
            SwipeOutcome::SnapBack
        }
    }

    /// Offset to animate to when sliding off-screen
    pub fn slide_off_offset(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Left => -self.viewport_width,
            SwipeDirection::Right => self.viewport_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> SwipeGesture {
        SwipeGesture::new(400.0, SwipeThresholds::default())
    }

    #[test]
    fn test_short_slow_drag_snaps_back() {
        let mut g = gesture();
        g.update(40.0);
        assert_eq!(g.release(100.0), SwipeOutcome::SnapBack);
        assert_eq!(g.translation_x(), 0.0);
    }

    #[test]
    fn test_long_drag_dismisses() {
        let mut g = gesture();
        assert_eq!(g.distance_threshold(), 80.0);
        g.update(-120.0);
        assert_eq!(g.release(0.0), SwipeOutcome::Dismiss(SwipeDirection::Left));
    }

    #[test]
    fn test_fast_flick_dismisses() {
        let mut g = gesture();
        g.update(10.0);
        assert_eq!(g.release(900.0), SwipeOutcome::Dismiss(SwipeDirection::Right));

        g.update(0.0);
        assert_eq!(g.release(-700.0), SwipeOutcome::Dismiss(SwipeDirection::Left));
    }

    #[test]
    fn test_threshold_scales_with_viewport() {
        let mut g = SwipeGesture::new(1000.0, SwipeThresholds::default());
        g.update(120.0);
        assert_eq!(g.release(0.0), SwipeOutcome::SnapBack);
    }

    #[test]
    fn test_drag_opacity_feedback() {
        let mut g = gesture();
        assert_eq!(g.update(0.0), 1.0);
        assert!((g.update(150.0) - 0.65).abs() < 1e-6);
        assert_eq!(g.update(-1000.0), MIN_DRAG_OPACITY);
    }

    #[test]
    fn test_slide_off_offset() {
        let g = gesture();
        assert_eq!(g.slide_off_offset(SwipeDirection::Left), -400.0);
        assert_eq!(g.slide_off_offset(SwipeDirection::Right), 400.0);
    }

    #[test]
    fn test_thresholds_from_json() {
        let t: SwipeThresholds = serde_json::from_str(r#"{"velocity": 800.0}"#).unwrap();
        assert_eq!(t.velocity, 800.0);
        assert_eq!(t.distance_fraction, 0.2);
    }
}
