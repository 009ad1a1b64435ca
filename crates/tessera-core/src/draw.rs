//! Draw commands.
//!
//! All list rendering reduces to these primitives. A sequence of commands is a
//! display list that any [`Canvas`] backend can replay.

use crate::raster::Bitmap;
use crate::text::{TextAlignment, TextStyle};
use crate::widget::Canvas;
use crate::{Color, Point, Rect};
use std::sync::Arc;

/// A single rendering primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle fill.
    FillRect {
        /// Area to fill
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline.
    StrokeRect {
        /// Outline rectangle
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Pen width in pixels
        width: i32,
    },
    /// Straight line.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Line color
        color: Color,
        /// Pen width in pixels
        width: i32,
    },
    /// Image blit: `src` of `image` scaled into `dest`.
    Image {
        /// Source raster
        image: Arc<Bitmap>,
        /// Destination rectangle
        dest: Rect,
        /// Source rectangle within the image
        src: Rect,
    },
    /// Text laid out inside a box.
    Text {
        /// Content
        text: String,
        /// Layout box
        bounds: Rect,
        /// Font and color
        style: TextStyle,
        /// Placement within the box
        align: TextAlignment,
    },
}

impl DrawCommand {
    /// Issue this command against a canvas.
    pub fn apply(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
            Self::StrokeRect { rect, color, width } => canvas.stroke_rect(*rect, *color, *width),
            Self::Line {
                from,
                to,
                color,
                width,
            } => canvas.draw_line(*from, *to, *color, *width),
            Self::Image { image, dest, src } => canvas.draw_image(image, *dest, *src),
            Self::Text {
                text,
                bounds,
                style,
                align,
            } => canvas.draw_text(text, *bounds, style, *align),
        }
    }

    /// Bounding box touched by the command.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => *rect,
            Self::Line { from, to, .. } => {
                let x = from.x.min(to.x);
                let y = from.y.min(to.y);
                Rect::new(x, y, (from.x - to.x).abs() + 1, (from.y - to.y).abs() + 1)
            }
            Self::Image { dest, .. } => *dest,
            Self::Text { bounds, .. } => *bounds,
        }
    }

    /// Copy of the command moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let delta = Point::new(dx, dy);
        let mut command = self.clone();
        match &mut command {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => {
                *rect = rect.offset(dx, dy);
            }
            Self::Line { from, to, .. } => {
                *from = *from + delta;
                *to = *to + delta;
            }
            Self::Image { dest, .. } => *dest = dest.offset(dx, dy),
            Self::Text { bounds, .. } => *bounds = bounds.offset(dx, dy),
        }
        command
    }
}
