//! Color constants for text on the card.
//!
//! Glow and glass colors come from the configurable palette; these stay fixed.

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f7fa";
pub const TEXT_SECONDARY: &str = "rgba(245, 247, 250, 0.7)";
pub const TEXT_MUTED: &str = "rgba(245, 247, 250, 0.45)";
