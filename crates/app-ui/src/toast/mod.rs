//! Toast presentation
//!
//! Everything between the toast queue and pixels: which toasts are on screen
//! and in what phase, where they go, how they look, and how drags resolve.

mod gesture;
mod layout;
mod overlay;
mod presence;
mod stack;
mod style;

pub use gesture::{SwipeGesture, SwipeThresholds, SNAP_BACK};
pub use layout::{Platform, StackLayout, ToastPlacement, TOAST_GAP, TOAST_HEIGHT};
pub use overlay::ToastOverlay;
pub use presence::{PhaseAnimation, ToastPhase, ToastPresence};
pub use stack::{StackEntry, ToastStack};
pub use style::{variant_style, AlertKind, VariantStyle};
