//! Common value types used throughout PanelKit

use serde::{Deserialize, Serialize};

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    // Sidebar palette
    pub const DARKER_GRAY: Color = Color::rgb(0.117647, 0.117647, 0.117647);
    pub const DARK_GRAY: Color = Color::rgb(0.156863, 0.156863, 0.156863);
    pub const MEDIUM_GRAY: Color = Color::rgb(0.301961, 0.301961, 0.301961);
    pub const LIGHT_GRAY: Color = Color::rgb(0.647059, 0.647059, 0.647059);
    pub const BRAND_ORANGE: Color = Color::rgb(0.862745, 0.541176, 0.0);
    pub const PROGRESS_COMPLETE_GREEN: Color = Color::rgb(0.215686, 0.941176, 0.27451);
    pub const PROGRESS_ERROR_RED: Color = Color::rgb(0.901961, 0.117647, 0.117647);

    /// Create a new color from RGB values (0.0 - 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color from RGBA values (0.0 - 1.0)
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from hex string (#RRGGBB or #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Result<Self, &'static str> {
        let hex = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or("Invalid hex color")
        };

        match hex.len() {
            6 => Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let base = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                Ok(base.with_alpha(channel(6..8)? as f32 / 255.0))
            }
            _ => Err("Invalid hex color length"),
        }
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        }
    }

    /// Set alpha channel
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// 2D size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero size
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Check if the size is empty (zero area)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Edge insets for padding and borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl EdgeInsets {
    /// Same inset on every side
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical insets for top/bottom, horizontal for left/right
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Horizontal alignment of a widget's content or of a slot in a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}
