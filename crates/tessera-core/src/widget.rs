//! Widget and Canvas traits.
//!
//! Widgets follow a layout-paint cycle driven by the host event loop:
//!
//! 1. **Layout**: receive the allocated bounds (a resize)
//! 2. **Event**: react to pointer input, optionally emitting a message
//! 3. **Paint**: replay the widget's composite onto the host canvas
//!
//! Coordinates handed to and produced by a widget are local to its bounds.

use crate::event::Event;
use crate::raster::Bitmap;
use crate::text::{TextAlignment, TextStyle};
use crate::{Color, Point, Rect, Size};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget {
    /// Position the widget within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Issue draw commands for the widget's current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, returning a message when state changed in a
    /// way the host may care about.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>>;

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the raster backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a rectangle outline with a pen of the given width.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: i32);

    /// Draw the `src` region of `image` scaled into `dest`.
    fn draw_image(&mut self, image: &std::sync::Arc<Bitmap>, dest: Rect, src: Rect);

    /// Draw text inside a layout box.
    fn draw_text(&mut self, text: &str, bounds: Rect, style: &TextStyle, align: TextAlignment);
}
