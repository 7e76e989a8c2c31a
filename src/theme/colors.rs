//! Colors - Console Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Color palette - All colors are accessed via associated functions
pub struct ConsoleColors;

impl ConsoleColors {
    // Primary colors
    /// Title bar background - Indigo
    pub fn header_bg() -> Rgba { rgb(0x4f46e5) }
    /// Link color
    pub fn link() -> Rgba { rgb(0x2563eb) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x4f46e5) }
    pub fn button_primary_hover() -> Rgba { rgb(0x4338ca) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    pub fn button_danger_hover() -> Rgba { rgb(0xb91c1c) }
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x4f46e5) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xeef2ff) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_readonly_bg() -> Rgba { rgb(0xf3f4f6) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}
