//! Colour and paint values.

use serde::Deserialize;

/// An RGBA colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Create from hex string (e.g., "#FF5733" or "FF5733").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Convert to 8-bit RGB, rounding each channel.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Lower-case `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Paint type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintKind {
    Solid,
    /// Gradients, images, videos and anything newer.
    Other(String),
}

impl<'de> Deserialize<'de> for PaintKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "SOLID" => PaintKind::Solid,
            _ => PaintKind::Other(tag),
        })
    }
}

/// One entry of a node's fill list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default = "visible")]
    pub visible: bool,
}

fn visible() -> bool {
    true
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            opacity: None,
            visible: true,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Colour of a visible solid paint with its effective alpha, if any.
    pub fn solid_color(&self) -> Option<Color> {
        if self.kind != PaintKind::Solid || !self.visible {
            return None;
        }
        let color = self.color?;
        let alpha = color.a * self.opacity.unwrap_or(1.0);
        Some(Color { a: alpha, ..color })
    }
}

/// Effective colour of the first visible solid fill, `None` when transparent.
pub fn first_solid_color(fills: &[Paint]) -> Option<Color> {
    fills
        .iter()
        .find_map(Paint::solid_color)
        .filter(|c| c.a > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#007AFF").unwrap();
        assert_eq!(color.to_hex(), "#007aff");
        assert_eq!(Color::from_hex("94A3B8").unwrap().to_hex(), "#94a3b8");
        assert!(Color::from_hex("#12345").is_none());
    }

    #[test]
    fn test_first_solid_color_skips_hidden_and_gradients() {
        let mut hidden = Paint::solid(Color::WHITE);
        hidden.visible = false;
        let gradient = Paint {
            kind: PaintKind::Other("GRADIENT_LINEAR".into()),
            color: None,
            opacity: None,
            visible: true,
        };
        let fills = vec![hidden, gradient, Paint::solid(Color::from_rgb8(255, 0, 0))];

        assert_eq!(first_solid_color(&fills).unwrap().to_hex(), "#ff0000");
    }

    #[test]
    fn test_zero_opacity_is_transparent() {
        let fills = vec![Paint::solid(Color::WHITE).with_opacity(0.0)];
        assert!(first_solid_color(&fills).is_none());
    }

    #[test]
    fn test_paint_deserialize() {
        let paint: Paint =
            serde_json::from_str(r#"{"type":"SOLID","color":{"r":1,"g":0,"b":0},"opacity":0.5}"#).unwrap();
        assert_eq!(paint.kind, PaintKind::Solid);
        assert_eq!(paint.solid_color().unwrap().a, 0.5);
    }
}
