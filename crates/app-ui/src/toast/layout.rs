//! Toast stack layout
//!
//! Toasts are absolutely positioned one below the other from the top safe
//! area, newest at index 0.

use serde::{Deserialize, Serialize};

use crate::tokens::{spacing, z_index};

/// Height of one toast row
pub const TOAST_HEIGHT: f32 = 70.0;

/// Vertical gap between toasts
pub const TOAST_GAP: f32 = 8.0;

/// Target platform, for status bar height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS (notch-era status bar)
    #[default]
    Ios,
    /// Android
    Android,
}

impl Platform {
    /// Status bar height in points
    pub fn status_bar_height(&self) -> f32 {
        match self {
            Platform::Ios => 59.0,
            Platform::Android => 20.0,
        }
    }
}

/// Where to draw one toast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToastPlacement {
    /// Distance from the top of the screen
    pub top: f32,
    /// Left inset
    pub left: f32,
    /// Right inset
    pub right: f32,
    /// Stacking order; newest is highest
    pub z_index: i32,
}

/// Layout parameters for the toast stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackLayout {
    /// Platform
    pub platform: Platform,
    /// Row height
    pub toast_height: f32,
    /// Gap between rows
    pub gap: f32,
    /// Horizontal inset
    pub inset: f32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl StackLayout {
    /// Default layout for a platform
    pub fn for_platform(platform: Platform) -> Self {
        Self { platform, toast_height: TOAST_HEIGHT, gap: TOAST_GAP, inset: spacing::SPACE_LG }
    }

    /// Placement of the toast at `index` (0 = newest)
    pub fn placement(&self, index: usize) -> ToastPlacement {
        ToastPlacement {
            top: self.platform.status_bar_height() + index as f32 * (self.toast_height + self.gap),
            left: self.inset,
            right: self.inset,
            z_index: z_index::TOAST - index as i32,
        }
    }
}
