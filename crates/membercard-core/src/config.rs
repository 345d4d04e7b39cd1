//! Card configuration.
//!
//! Everything about the card that is fixed at startup lives in one
//! [`CardConfig`] record: layout constants, the color palette and the
//! display content. Hosts load it from JSON (partial files are fine, every
//! field has a default) or use [`CardConfig::default`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// An sRGB color with straight alpha.
///
/// Serialized as `#rrggbb` or `#rrggbbaa`. An alpha that does not fit in
/// one byte is written as `rgba(r, g, b, a)` instead, so printing and
/// reloading a config never shifts it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn fade(self, factor: f64) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// CSS `rgba()` function notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }

    /// CSS `rgb()` notation, alpha dropped. For SVG `stop-color`.
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (self.r, self.g, self.b);
        let byte = (self.a * 255.0).round();
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else if byte / 255.0 == self.a {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, byte as u8)
        } else {
            write!(f, "rgba({}, {}, {}, {})", r, g, b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CardError::InvalidColor(s.to_string());
        if let Some(args) = s.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
            return parse_rgba_function(args).ok_or_else(invalid);
        }

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 {
            channel(6)? as f64 / 255.0
        } else {
            1.0
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

/// Parse the argument list of `rgba(r, g, b, a)`.
fn parse_rgba_function(args: &str) -> Option<Rgba> {
    let mut parts = args.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let a: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(Rgba::rgba(r, g, b, a))
}

impl TryFrom<String> for Rgba {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Fixed geometry of the card and its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLayout {
    /// Corner radius of the card silhouette
    pub corner_radius: f64,
    /// Card height; width follows the host container
    pub card_height: f64,
    /// Largest tilt in degrees, reached with the pointer on an edge
    pub max_tilt_degrees: f64,
    /// Scale applied while pressed
    pub pressed_scale: f64,
    /// Perspective depth for the 3D rotation, in pixels
    pub perspective: f64,
    /// Horizontal margin between the host edges and the card
    pub horizontal_inset: f64,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            corner_radius: 24.0,
            card_height: 224.0,
            max_tilt_degrees: 15.0,
            pressed_scale: 1.05,
            perspective: 800.0,
            horizontal_inset: 20.0,
        }
    }
}

/// Colors used by the glow, glass and backdrop layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cyan: Rgba,
    pub blue: Rgba,
    pub white: Rgba,
    pub yellow: Rgba,
    pub orange: Rgba,
    /// Host background behind the card
    pub backdrop: Rgba,
    /// Translucent card substrate
    pub surface: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cyan: Rgba::rgb(0x00, 0xd9, 0xff),
            blue: Rgba::rgb(0x3d, 0x7b, 0xff),
            white: Rgba::rgb(0xff, 0xff, 0xff),
            yellow: Rgba::rgb(0xff, 0xd8, 0x4d),
            orange: Rgba::rgb(0xff, 0x8a, 0x3d),
            backdrop: Rgba::rgb(0x05, 0x06, 0x0a),
            surface: Rgba::rgba(0x12, 0x14, 0x1c, 0.85),
        }
    }
}

/// What the card says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub holder_name: String,
    pub follower_count: u64,
    /// Full member identifier; only the last four characters are shown
    pub member_id: String,
    /// Expiry label, shown verbatim (e.g. "12/28")
    pub expiry: String,
    pub tier: String,
    /// Number of filled stars, at most [`CardContent::MAX_STARS`]
    pub star_count: u8,
}

impl CardContent {
    pub const MAX_STARS: u8 = 5;

    /// Follower count as shown on the card: `999`, `12.4K`, `3.1M`.
    pub fn follower_label(&self) -> String {
        format_count(self.follower_count)
    }

    /// Member identifier with everything but the last four characters hidden.
    pub fn masked_member_id(&self) -> String {
        let chars: Vec<char> = self.member_id.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("•••• •••• •••• {}", tail)
    }
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            holder_name: "Alex Morgan".to_string(),
            follower_count: 12_400,
            member_id: "4000123456784821".to_string(),
            expiry: "12/28".to_string(),
            tier: "PLATINUM".to_string(),
            star_count: 3,
        }
    }
}

/// Compact count formatting with one decimal and no trailing `.0`.
fn format_count(count: u64) -> String {
    fn compact(value: f64, suffix: &str) -> String {
        let text = format!("{:.1}", value);
        let text = text.strip_suffix(".0").unwrap_or(&text);
        format!("{}{}", text, suffix)
    }

    if count < 1_000 {
        return count.to_string();
    }

    let thousands = (count as f64 / 100.0).round() / 10.0;
    if thousands < 1_000.0 {
        return compact(thousands, "K");
    }

    let millions = (count as f64 / 100_000.0).round() / 10.0;
    compact(millions, "M")
}

/// Complete card configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub layout: CardLayout,
    pub palette: Palette,
    pub content: CardContent,
}

impl CardConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded card config");
        Ok(config)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: CardConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON of the full config.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the card cannot render sensibly.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        let invalid = |msg: String| Err(CardError::InvalidConfig(msg));

        if !(layout.corner_radius.is_finite() && layout.corner_radius >= 0.0) {
            return invalid(format!(
                "corner_radius must be non-negative, got {}",
                layout.corner_radius
            ));
        }
        if !(layout.card_height.is_finite() && layout.card_height > 0.0) {
            return invalid(format!(
                "card_height must be positive, got {}",
                layout.card_height
            ));
        }
        if !(layout.max_tilt_degrees > 0.0 && layout.max_tilt_degrees < 90.0) {
            return invalid(format!(
                "max_tilt_degrees must be within (0, 90), got {}",
                layout.max_tilt_degrees
            ));
        }
        if !(layout.pressed_scale.is_finite() && layout.pressed_scale >= 1.0) {
            return invalid(format!(
                "pressed_scale must be at least 1, got {}",
                layout.pressed_scale
            ));
        }
        if !(layout.perspective.is_finite() && layout.perspective > 0.0) {
            return invalid(format!(
                "perspective must be positive, got {}",
                layout.perspective
            ));
        }
        if !(layout.horizontal_inset.is_finite() && layout.horizontal_inset >= 0.0) {
            return invalid(format!(
                "horizontal_inset must be non-negative, got {}",
                layout.horizontal_inset
            ));
        }
        if self.content.star_count > CardContent::MAX_STARS {
            return invalid(format!(
                "star_count must be at most {}, got {}",
                CardContent::MAX_STARS,
                self.content.star_count
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.corner_radius, 24.0);
        assert_eq!(config.layout.card_height, 224.0);
        assert_eq!(config.layout.max_tilt_degrees, 15.0);
        assert_eq!(config.layout.horizontal_inset, 20.0);
    }

    #[test]
    fn test_parse_colors() {
        let color: Rgba = "#00d9ff".parse().unwrap();
        assert_eq!(color, Rgba::rgb(0x00, 0xd9, 0xff));

        let color: Rgba = "#12141c80".parse().unwrap();
        assert_eq!((color.r, color.g, color.b), (0x12, 0x14, 0x1c));
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);

        let color: Rgba = "rgba(18, 20, 28, 0.85)".parse().unwrap();
        assert_eq!(color, Rgba::rgba(18, 20, 28, 0.85));

        for bad in [
            "00d9ff",
            "#00d9f",
            "#00d9ffa",
            "#gg0000",
            "#ééé",
            "#+0+0+0",
            "#+0+0+0+0",
            "rgba(1, 2, 3)",
            "rgba(1, 2, 3, 1.5)",
            "rgba(256, 0, 0, 0.5)",
        ] {
            assert!(bad.parse::<Rgba>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn test_color_display_roundtrips_through_hex() {
        assert_eq!(Rgba::rgb(0xff, 0x8a, 0x3d).to_string(), "#ff8a3d");
        assert_eq!(Rgba::rgba(0, 0, 0, 64.0 / 255.0).to_string(), "#00000040");
        assert_eq!(
            Rgba::rgba(18, 20, 28, 0.85).to_string(),
            "rgba(18, 20, 28, 0.85)"
        );
    }

    #[test]
    fn test_fractional_alpha_survives_reparse() {
        for a in [0.85, 0.35, 0.14, 0.02, 0.0] {
            let color = Rgba::rgba(18, 20, 28, a);
            let reparsed: Rgba = color.to_string().parse().unwrap();
            assert_eq!(reparsed, color);
        }
    }

    #[test]
    fn test_color_css() {
        assert_eq!(
            Rgba::rgb(255, 255, 255).fade(0.5).css(),
            "rgba(255, 255, 255, 0.500)"
        );
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(4.0).a, 1.0);
        assert_eq!(Rgba::rgb(1, 2, 3).css_rgb(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_follower_label() {
        let cases = [
            (0, "0"),
            (999, "999"),
            (1_000, "1K"),
            (12_400, "12.4K"),
            (12_449, "12.4K"),
            (999_949, "999.9K"),
            (999_999, "1M"),
            (3_100_000, "3.1M"),
        ];
        for (count, expected) in cases {
            let content = CardContent {
                follower_count: count,
                ..CardContent::default()
            };
            assert_eq!(content.follower_label(), expected, "count {}", count);
        }
    }

    #[test]
    fn test_masked_member_id() {
        let content = CardContent::default();
        assert_eq!(content.masked_member_id(), "•••• •••• •••• 4821");

        let short = CardContent {
            member_id: "42".to_string(),
            ..CardContent::default()
        };
        assert_eq!(short.masked_member_id(), "•••• •••• •••• 42");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CardConfig::from_json(
            r##"{ "content": { "holder_name": "Sam Rivera", "star_count": 5 },
                 "palette": { "cyan": "#00ffcc" } }"##,
        )
        .unwrap();

        assert_eq!(config.content.holder_name, "Sam Rivera");
        assert_eq!(config.content.star_count, 5);
        assert_eq!(config.content.tier, "PLATINUM");
        assert_eq!(config.palette.cyan, Rgba::rgb(0x00, 0xff, 0xcc));
        assert_eq!(config.palette.blue, Palette::default().blue);
        assert_eq!(config.layout, CardLayout::default());
    }

    #[test]
    fn test_validation_rejects_bad_layout() {
        let mut config = CardConfig::default();
        config.layout.card_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CardError::InvalidConfig(_))
        ));

        let mut config = CardConfig::default();
        config.layout.max_tilt_degrees = 90.0;
        assert!(config.validate().is_err());

        let mut config = CardConfig::default();
        config.layout.pressed_scale = 0.9;
        assert!(config.validate().is_err());

        let mut config = CardConfig::default();
        config.content.star_count = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_color_in_json() {
        let err = CardConfig::from_json(r#"{ "palette": { "blue": "navy" } }"#).unwrap_err();
        assert!(matches!(err, CardError::Parse(_)));
    }

    #[test]
    fn test_to_json_roundtrip() {
        let config = CardConfig::default();
        let json = config.to_json().unwrap();
        let parsed = CardConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
