//! Design tokens for the wallet app
//!
//! Only the tokens the toast overlay and search bar draw on live here.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Toast fade back after a cancelled swipe
    pub const TOAST_FADE: u32 = 250;
    /// Toast exit (fade, scale down, slide)
    pub const TOAST_EXIT: u32 = 300;
    /// Toast entrance
    pub const TOAST_ENTER: u32 = 350;
}

/// Easing functions
pub mod easing {
    /// Toast entrance curve
    pub const TOAST_ENTER: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
    /// Toast exit curve (standard material easing)
    pub const TOAST_EXIT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
    /// Ease out cubic
    pub const EASE_OUT_CUBIC: &str = "cubic-bezier(0.33, 1, 0.68, 1)";
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Toast overlay base
    pub const TOAST: i32 = 1000;
}

// =============================================================================
// Colors
// =============================================================================

/// Hex colour tokens used by toast variants
pub mod palette {
    /// Muted foreground
    pub const MUTED: &str = "#71717A";
    /// Primary
    pub const PRIMARY: &str = "#18181B";
    /// Destructive red
    pub const DESTRUCTIVE: &str = "#EF4444";
    /// Success green
    pub const GREEN_500: &str = "#22C55E";
    /// Warning orange
    pub const ORANGE_500: &str = "#F97316";
    /// Info blue
    pub const BLUE_500: &str = "#3B82F6";
}
