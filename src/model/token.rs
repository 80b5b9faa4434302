//! Positioned word tokens.

use serde::{Deserialize, Serialize};

/// A single recognized word with its pixel-space bounding box.
///
/// Coordinates use a top-left origin with `y` growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The word text
    #[serde(default)]
    pub text: String,
    /// Left edge
    #[serde(default)]
    pub x: f32,
    /// Top edge
    #[serde(default)]
    pub y: f32,
    /// Box width
    #[serde(default)]
    pub width: f32,
    /// Box height (font size proxy)
    #[serde(default)]
    pub height: f32,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Bottom edge of the box.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge of the box.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Copy of this token with every non-finite coordinate replaced by zero.
    pub fn sanitized(&self) -> Self {
        Self {
            text: self.text.clone(),
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: finite_or_zero(self.width),
            height: finite_or_zero(self.height),
        }
    }
}

/// Corner coordinates as reported by recognition engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left
    pub x0: f32,
    /// Top
    pub y0: f32,
    /// Right
    pub x1: f32,
    /// Bottom
    pub y1: f32,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a bounding box from an origin and a size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_geometry() {
        let token = Token::new("Rust", 10.0, 20.0, 40.0, 12.0);
        assert_eq!(token.center_x(), 30.0);
        assert_eq!(token.right(), 50.0);
        assert_eq!(token.bottom(), 32.0);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let token = Token::new("x", f32::NAN, f32::INFINITY, -f32::INFINITY, 5.0);
        let clean = token.sanitized();
        assert_eq!(clean.x, 0.0);
        assert_eq!(clean.y, 0.0);
        assert_eq!(clean.width, 0.0);
        assert_eq!(clean.height, 5.0);
        assert_eq!(clean.text, "x");
    }

    #[test]
    fn test_token_deserialize_missing_geometry() {
        let token: Token = serde_json::from_str(r#"{"text":"Skills","y":40}"#).unwrap();
        assert_eq!(token.text, "Skills");
        assert_eq!(token.x, 0.0);
        assert_eq!(token.y, 40.0);
    }

    #[test]
    fn test_bounding_box_size() {
        let bbox = BoundingBox::from_origin_size(5.0, 6.0, 10.0, 4.0);
        assert_eq!(bbox, BoundingBox::new(5.0, 6.0, 15.0, 10.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 4.0);
    }
}
