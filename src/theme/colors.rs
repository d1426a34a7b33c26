//! Color constants for the Storefront palette.
//!
//! Dark slate storefront aesthetic.

#![allow(dead_code)]

// === SLATE (Backgrounds) ===
pub const SLATE_DEEP: &str = "#030712";
pub const SLATE_CARD: &str = "rgba(17, 24, 39, 0.7)";
pub const SLATE_BORDER: &str = "#1f2937";

// === INDIGO (Accents, Category Pills) ===
pub const INDIGO: &str = "#6366f1";
pub const INDIGO_SOFT: &str = "#818cf8";
pub const INDIGO_TINT: &str = "rgba(79, 70, 229, 0.2)";

// === SEMANTIC ===
pub const PRICE_GREEN: &str = "#4ade80";
pub const STAR_GOLD: &str = "#facc15";
pub const DANGER: &str = "#f87171";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f9fafb";
pub const TEXT_MUTED: &str = "#9ca3af";
