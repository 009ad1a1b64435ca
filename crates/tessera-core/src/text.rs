//! Text style and alignment types.
//!
//! # Examples
//!
//! ```
//! use tessera_core::{HorAlign, TextAlign, VerAlign};
//!
//! assert_eq!(HorAlign::Left.text_align(), TextAlign::Near);
//! assert_eq!(VerAlign::Bottom.text_align(), TextAlign::Far);
//! ```

use crate::Color;
use serde::{Deserialize, Serialize};

/// Font and color used to draw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in points
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Normal style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

/// Alignment of text along one axis of its layout box, as understood by the
/// rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum TextAlign {
    /// Start of the axis (left or top)
    #[default]
    Near,
    /// Centered
    Center,
    /// End of the axis (right or bottom)
    Far,
}

/// Horizontal alignment of a text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorAlign {
    /// Left edge
    #[default]
    Left,
    /// Centered
    Middle,
    /// Right edge
    Right,
}

impl HorAlign {
    /// Map to the backend alignment primitive.
    #[must_use]
    pub const fn text_align(self) -> TextAlign {
        match self {
            Self::Left => TextAlign::Near,
            Self::Middle => TextAlign::Center,
            Self::Right => TextAlign::Far,
        }
    }
}

/// Vertical alignment of a text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerAlign {
    /// Top edge
    Top,
    /// Centered
    #[default]
    Middle,
    /// Bottom edge
    Bottom,
}

impl VerAlign {
    /// Map to the backend alignment primitive.
    #[must_use]
    pub const fn text_align(self) -> TextAlign {
        match self {
            Self::Top => TextAlign::Near,
            Self::Middle => TextAlign::Center,
            Self::Bottom => TextAlign::Far,
        }
    }
}

/// Two-axis alignment handed to [`crate::Canvas::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct TextAlignment {
    /// Horizontal placement within the layout box
    pub horizontal: TextAlign,
    /// Vertical placement within the layout box
    pub vertical: TextAlign,
}

impl TextAlignment {
    /// Resolve a cell's alignment pair.
    #[must_use]
    pub const fn new(horizontal: HorAlign, vertical: VerAlign) -> Self {
        Self {
            horizontal: horizontal.text_align(),
            vertical: vertical.text_align(),
        }
    }
}
