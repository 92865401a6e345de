//! Recorded draw commands

use super::DrawSurface;
use crate::foundation::math::Point2;
use crate::render::Color;

/// A single overlay draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Top-left corner
        min: Point2,
        /// Bottom-right corner
        max: Point2,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline
    StrokeRect {
        /// Top-left corner
        min: Point2,
        /// Bottom-right corner
        max: Point2,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        thickness: f32,
    },
    /// Text
    Text {
        /// Top-left corner of the text
        position: Point2,
        /// Text color
        color: Color,
        /// Text content
        text: String,
    },
}

/// [`DrawSurface`] that records every call in order
///
/// Lets a host replay the overlay into a renderer later in the frame, and
/// lets tests inspect exactly what was drawn.
#[derive(Debug, Clone, Default)]
pub struct DrawCommandBuffer {
    commands: Vec<DrawCommand>,
}

impl DrawCommandBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the recorded commands onto another surface
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { min, max, color } => surface.fill_rect(*min, *max, *color),
                DrawCommand::StrokeRect { min, max, color, thickness } => {
                    surface.stroke_rect(*min, *max, *color, *thickness);
                }
                DrawCommand::Text { position, color, text } => surface.text(*position, *color, text),
            }
        }
    }
}

impl DrawSurface for DrawCommandBuffer {
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color) {
        self.commands.push(DrawCommand::FillRect { min, max, color });
    }

    fn stroke_rect(&mut self, min: Point2, max: Point2, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::StrokeRect { min, max, color, thickness });
    }

    fn text(&mut self, position: Point2, color: Color, text: &str) {
        self.commands.push(DrawCommand::Text {
            position,
            color,
            text: text.to_owned(),
        });
    }
}
