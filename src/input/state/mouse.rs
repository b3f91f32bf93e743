use crate::draw::{Shape, ShapeKind};
use crate::input::{
    events::{MouseButton, TextPrompt},
    tool::Tool,
};
use crate::session::Command;
use crate::util::Point;
use log::debug;

use super::{DrawingState, InputState};

/// Message shown by the text tool's prompt.
pub const TEXT_PROMPT: &str = "Enter text:";

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click while Idle: Starts a gesture with the current tool
    /// - Right click: Cancels the current gesture
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, DrawingState::Idle) {
                    let start = Point::new(x, y);
                    self.state = DrawingState::Drawing {
                        tool: self.context.tool(),
                        start,
                        cursor: start,
                    };
                    self.needs_redraw = true;
                }
            }
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Behavior
    /// - Sketch tool: returns a segment from the previous point to here and
    ///   advances the previous point, so a stroke is many short segments
    /// - Other tools: moves the live preview end point
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) -> Option<Command> {
        let DrawingState::Drawing { tool, cursor, .. } = &mut self.state else {
            return None;
        };

        let current = Point::new(x, y);
        let previous = std::mem::replace(cursor, current);
        let sketching = *tool == Tool::Sketch;
        self.needs_redraw = true;

        if sketching {
            Some(Command::Append(self.stamp(ShapeKind::Sketch, previous, current)))
        } else {
            None
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Behavior
    /// When the left button is released during a gesture:
    /// - Sketch: closes the stroke with a final segment (skipped if zero-length)
    /// - Text: asks `prompt` for a label and places it at the press position;
    ///   empty or cancelled input creates nothing
    /// - Any other tool: one shape spanning press to release
    ///
    /// The controller returns to Idle in every case.
    pub fn on_mouse_release(
        &mut self,
        button: MouseButton,
        x: i32,
        y: i32,
        prompt: &mut dyn TextPrompt,
    ) -> Option<Command> {
        if button != MouseButton::Left {
            return None;
        }

        let DrawingState::Drawing {
            tool,
            start,
            cursor,
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return None;
        };
        self.needs_redraw = true;

        let end = Point::new(x, y);
        let shape = match tool {
            Tool::Sketch => {
                if cursor == end {
                    return None;
                }
                self.stamp(ShapeKind::Sketch, cursor, end)
            }
            Tool::Text => match prompt.prompt(TEXT_PROMPT) {
                Some(label) if !label.is_empty() => Shape::text(
                    start,
                    self.context.color(),
                    self.context.brush_size(),
                    label,
                ),
                _ => {
                    debug!("Text input empty or cancelled; nothing placed");
                    return None;
                }
            },
            other => self.stamp(other.shape_kind(), start, end),
        };

        Some(Command::Append(shape))
    }

    /// Builds a two-point shape with the current color and brush size.
    fn stamp(&self, kind: ShapeKind, start: Point, end: Point) -> Shape {
        Shape::new(
            kind,
            start,
            end,
            self.context.color(),
            self.context.brush_size(),
        )
    }
}
