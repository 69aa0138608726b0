//! Draw commands and the recording canvas.
//!
//! All rendering reduces to these primitives. Widgets paint into a
//! [`DrawList`]; backends (the SVG snapshot writer, a browser shell)
//! consume the recorded commands.

use crate::geometry::{Point, Rect, Size};
use crate::widget::{Canvas, TextStyle};
use crate::Color;
use serde::{Deserialize, Serialize};

/// A single draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Target rectangle
        rect: Rect,
        /// Corner radius (0 = square)
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Stroked rectangle
    RectOutline {
        /// Target rectangle
        rect: Rect,
        /// Corner radius (0 = square)
        radius: f32,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Stroked circle
    CircleOutline {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        text: String,
        /// Anchor position (baseline-left unless aligned otherwise)
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Image reference
    Image {
        /// Source path of the image asset
        source: String,
        /// Target rectangle
        rect: Rect,
        /// Corner radius applied when clipping
        corner_radius: f32,
    },
}

impl DrawCommand {
    /// Check that every coordinate in the command is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Rect { rect, radius, .. } | Self::RectOutline { rect, radius, .. } => {
                rect.is_finite() && radius.is_finite()
            }
            Self::Circle { center, radius, .. } | Self::CircleOutline { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
            Self::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            Self::Text { position, .. } => position.is_finite(),
            Self::Image {
                rect,
                corner_radius,
                ..
            } => rect.is_finite() && corner_radius.is_finite(),
        }
    }
}

/// A recorded sequence of draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    /// Viewport the frame was rendered for
    pub viewport: Size,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list for a viewport.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Recorded commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the viewport.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Check that every recorded command is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(DrawCommand::is_finite)
    }

    /// Count the text commands containing the given substring.
    #[must_use]
    pub fn count_text_containing(&self, needle: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(needle)))
            .count()
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            rect,
            radius: 0.0,
            color,
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            rect,
            radius,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::RectOutline {
            rect,
            radius: 0.0,
            color,
            width,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::RectOutline {
            rect,
            radius,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::CircleOutline {
            center,
            radius,
            color,
            width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, source: &str, rect: Rect, corner_radius: f32) {
        self.commands.push(DrawCommand::Image {
            source: source.to_string(),
            rect,
            corner_radius,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let list = DrawList::new(Size::new(800.0, 600.0));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.is_finite());
    }

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new(Size::new(100.0, 100.0));
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        list.draw_text("hello", Point::new(5.0, 5.0), &TextStyle::default());

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_rounded_rect_carries_radius() {
        let mut list = DrawList::new(Size::ZERO);
        list.fill_rounded_rect(Rect::new(0.0, 0.0, 50.0, 50.0), 18.0, Color::WHITE);
        if let DrawCommand::Rect { radius, .. } = list.commands()[0] {
            assert_eq!(radius, 18.0);
        } else {
            panic!("Expected Rect command");
        }
    }

    #[test]
    fn test_is_finite_catches_nan() {
        let mut list = DrawList::new(Size::ZERO);
        list.fill_circle(Point::new(f32::NAN, 0.0), 5.0, Color::WHITE);
        assert!(!list.is_finite());
    }

    #[test]
    fn test_count_text_containing() {
        let mut list = DrawList::new(Size::ZERO);
        list.draw_text("Our Apps", Point::ORIGIN, &TextStyle::default());
        list.draw_text("Contact", Point::ORIGIN, &TextStyle::default());
        assert_eq!(list.count_text_containing("Apps"), 1);
        assert_eq!(list.count_text_containing("missing"), 0);
    }

    #[test]
    fn test_clear_keeps_viewport() {
        let mut list = DrawList::new(Size::new(640.0, 480.0));
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.viewport, Size::new(640.0, 480.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut list = DrawList::new(Size::new(10.0, 10.0));
        list.draw_image("apps/icon.png", Rect::new(0.0, 0.0, 48.0, 48.0), 16.0);
        let json = serde_json::to_string(&list).expect("serialize");
        let back: DrawList = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, list);
    }
}
