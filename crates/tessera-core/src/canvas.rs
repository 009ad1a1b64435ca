//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::raster::Bitmap;
use crate::text::{TextAlignment, TextStyle};
use crate::widget::Canvas;
use crate::{Color, Point, Rect};
use std::sync::Arc;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This doubles as an off-screen composite: a widget records into it once per
/// state change and replays it onto the host canvas on every repaint.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands, releasing any rasters they referenced.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay every recorded command, in order, onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            command.apply(target);
        }
    }

    /// Replay every command with its geometry moved to `origin`.
    pub fn replay_at(&self, target: &mut dyn Canvas, origin: Point) {
        if origin == Point::ORIGIN {
            self.replay(target);
            return;
        }
        for command in &self.commands {
            command.translated(origin.x, origin.y).apply(target);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: i32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_image(&mut self, image: &Arc<Bitmap>, dest: Rect, src: Rect) {
        self.commands.push(DrawCommand::Image {
            image: Arc::clone(image),
            dest,
            src,
        });
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, style: &TextStyle, align: TextAlignment) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            bounds,
            style: style.clone(),
            align,
        });
    }
}
