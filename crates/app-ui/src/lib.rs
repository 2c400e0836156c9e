//! User interface state for the wallet app
//!
//! This crate provides the presentation side of the UI: the toast overlay
//! (presence phases, stacking, swipe gestures, variant styling), the search
//! bar, and the design tokens they use.
//!
//! # Modules
//!
//! - [`toast`] - Toast overlay, stack, gestures and styles
//! - [`search`] - Debounced search bar
//! - [`tokens`] - Design tokens (spacing, animation, z-index, colours)
//!
//! # Example
//!
//! ```rust
//! use app_ui::toast::{Platform, StackLayout, SwipeGesture, SwipeThresholds};
//!
//! let layout = StackLayout::for_platform(Platform::Android);
//! assert_eq!(layout.placement(0).top, 20.0);
//!
//! let mut swipe = SwipeGesture::new(400.0, SwipeThresholds::default());
//! swipe.update(20.0);
//! assert!(!swipe.release(50.0).is_dismiss());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod search;
pub mod toast;
pub mod tokens;

// Re-export commonly used types
pub use search::SearchBar;
pub use toast::{
    variant_style, StackLayout, SwipeGesture, SwipeThresholds, ToastOverlay, ToastPhase,
    ToastPresence, ToastStack,
};
pub use tokens::{duration, easing, palette, spacing, z_index};
