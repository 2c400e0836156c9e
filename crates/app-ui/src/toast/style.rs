//! Variant → icon and colour mapping

use app_state::toast::ToastVariant;
use serde::{Deserialize, Serialize};

use crate::tokens::palette;

/// Alert container style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Neutral container
    Default,
    /// Red container
    Destructive,
}

/// Computed toast styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantStyle {
    /// Icon name
    pub icon: &'static str,
    /// Container style
    pub alert: AlertKind,
    /// Icon colour
    pub icon_color: &'static str,
    /// Action button background
    pub action_background: &'static str,
}

/// Style for a toast variant
pub fn variant_style(variant: ToastVariant) -> VariantStyle {
    match variant {
        ToastVariant::Default => VariantStyle {
            icon: "info",
            alert: AlertKind::Default,
            icon_color: palette::MUTED,
            action_background: palette::PRIMARY,
        },
        ToastVariant::Success => VariantStyle {
            icon: "check",
            alert: AlertKind::Default,
            icon_color: palette::GREEN_500,
            action_background: palette::GREEN_500,
        },
        ToastVariant::Error => VariantStyle {
            icon: "alert-circle",
            alert: AlertKind::Destructive,
            icon_color: palette::DESTRUCTIVE,
            action_background: palette::DESTRUCTIVE,
        },
        ToastVariant::Warning => VariantStyle {
            icon: "alert-triangle",
            alert: AlertKind::Default,
            icon_color: palette::ORANGE_500,
            action_background: palette::ORANGE_500,
        },
        ToastVariant::Info => VariantStyle {
            icon: "info",
            alert: AlertKind::Default,
            icon_color: palette::BLUE_500,
            action_background: palette::PRIMARY,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_is_destructive() {
        for variant in ToastVariant::ALL {
            let expected = if variant == ToastVariant::Error {
                AlertKind::Destructive
            } else {
                AlertKind::Default
            };
            assert_eq!(variant_style(variant).alert, expected, "{:?}", variant);
        }
    }

    #[test]
    fn test_variant_icons() {
        assert_eq!(variant_style(ToastVariant::Success).icon, "check");
        assert_eq!(variant_style(ToastVariant::Error).icon, "alert-circle");
        assert_eq!(variant_style(ToastVariant::Warning).icon, "alert-triangle");
        assert_eq!(variant_style(ToastVariant::Info).icon_color, palette::BLUE_500);
    }
}
