//! Centralized color constants for the UI.
//!
//! This module provides the facility brand palette used across all
//! page sections.

use eframe::egui::Color32;

/// Core brand colors.
pub mod brand {
    use super::Color32;

    /// Deep facility green, used for primary actions and accents on light
    /// surfaces.
    pub const PRIMARY: Color32 = Color32::from_rgb(0, 104, 56);
    /// Darker green for gradient tails and visual card fills.
    pub const PRIMARY_DEEP: Color32 = Color32::from_rgb(11, 37, 28);
    /// Bright mint accent, used on dark surfaces.
    pub const ACCENT: Color32 = Color32::from_rgb(72, 192, 163);
    /// Near-black green page background for dark sections.
    pub const DARK: Color32 = Color32::from_rgb(5, 31, 26);
    /// Even darker green for the footer.
    pub const FOOTER: Color32 = Color32::from_rgb(2, 16, 13);
}

/// Section background fills.
pub mod surface {
    use super::Color32;

    /// Plain white sections.
    pub const WHITE: Color32 = Color32::WHITE;
    /// Faintly tinted light sections.
    pub const LIGHT: Color32 = Color32::from_rgb(247, 250, 249);
    /// Card fill on light surfaces.
    pub const CARD: Color32 = Color32::WHITE;
    /// Card fill on dark surfaces.
    pub const CARD_DARK: Color32 = Color32::from_rgb(10, 44, 36);
}

/// Text colors per surface.
pub mod text {
    use super::Color32;

    /// Headings on light surfaces.
    pub const HEADING: Color32 = Color32::from_rgb(17, 24, 39);
    /// Body copy on light surfaces.
    pub const BODY: Color32 = Color32::from_rgb(75, 85, 99);
    /// Muted labels on light surfaces.
    pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Body copy on dark surfaces.
    pub const BODY_ON_DARK: Color32 = Color32::from_rgb(209, 213, 219);
    /// Muted labels on dark surfaces.
    pub const MUTED_ON_DARK: Color32 = Color32::from_rgb(148, 163, 175);
}

/// Colors for the coverage map canvas.
pub mod map {
    use super::Color32;

    /// Country outline stroke.
    pub const OUTLINE: Color32 = super::brand::ACCENT;

    /// Background dot grid - requires alpha, use function.
    pub fn dot() -> Color32 {
        Color32::from_rgba_unmultiplied(72, 192, 163, 46)
    }

    /// Soft glow behind the country outline - requires alpha, use function.
    pub fn glow() -> Color32 {
        super::brand::ACCENT.gamma_multiply(0.25)
    }

    /// Interior state boundaries - requires alpha, use function.
    pub fn state_line() -> Color32 {
        super::brand::ACCENT.gamma_multiply(0.4)
    }

    /// Ghost numeral behind the coverage stat - requires alpha, use function.
    pub fn ghost_text() -> Color32 {
        Color32::from_rgba_unmultiplied(255, 255, 255, 14)
    }
}
