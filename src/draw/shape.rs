//! Shape definitions for canvas drawings.

use super::bitmap::Bitmap;
use super::color::Color;
use crate::util::{self, Point, Rect};
use std::rc::Rc;

/// Font point size per unit of brush size for text labels.
pub const TEXT_SIZE_PER_BRUSH_UNIT: u32 = 5;

/// Kind of primitive a [`Shape`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight segment between the two drag points
    Line,
    /// Axis-aligned rectangle outline
    Rectangle,
    /// Outline inscribed in the drag box (rendered exactly like `Ellipse`)
    Circle,
    /// Ellipse outline inscribed in the drag box
    Ellipse,
    /// Three-point outline with a mirrored third vertex
    Triangle,
    /// One segment of a freehand stroke
    Sketch,
    /// Text label anchored at the press position
    Text,
    /// Loaded raster image
    Image,
}

/// One drawn primitive on the canvas.
///
/// Shapes are immutable: all fields are private and only readable through
/// accessors. The document changes by appending or removing whole shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    start: Point,
    end: Point,
    color: Color,
    stroke_width: u32,
    label: Option<String>,
    bitmap: Option<Rc<Bitmap>>,
}

impl Shape {
    /// Creates a two-point shape spanning `start` to `end`.
    ///
    /// Stroke width is raised to at least one pixel.
    pub fn new(kind: ShapeKind, start: Point, end: Point, color: Color, stroke_width: u32) -> Self {
        Self {
            kind,
            start,
            end,
            color,
            stroke_width: stroke_width.max(1),
            label: None,
            bitmap: None,
        }
    }

    /// Creates a text label with its baseline starting at `position`.
    ///
    /// The font size is `stroke_width * 5` points.
    pub fn text(position: Point, color: Color, stroke_width: u32, label: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::Text,
            start: position,
            end: position,
            color,
            stroke_width: stroke_width.max(1),
            label: Some(label.into()),
            bitmap: None,
        }
    }

    /// Creates an image shape covering `(0, 0)` to the bitmap's size.
    pub fn image(bitmap: Rc<Bitmap>) -> Self {
        let end = Point::new(
            i32::try_from(bitmap.width()).unwrap_or(i32::MAX),
            i32::try_from(bitmap.height()).unwrap_or(i32::MAX),
        );
        Self {
            kind: ShapeKind::Image,
            start: Point::new(0, 0),
            end,
            color: super::color::BLACK,
            stroke_width: 1,
            label: None,
            bitmap: Some(bitmap),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// End point of the drag. Equal to `start` for text labels.
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Label text, present only for [`ShapeKind::Text`].
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Decoded image, present only for [`ShapeKind::Image`].
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_deref()
    }

    /// Text size in points, derived from the brush size.
    pub fn font_size(&self) -> f64 {
        (self.stroke_width * TEXT_SIZE_PER_BRUSH_UNIT) as f64
    }

    /// Drag-normalized box spanned by `start` and `end`.
    ///
    /// Rectangles, circles, ellipses and images are drawn inside this box.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }

    /// Vertices of the outline drawn for a triangle shape.
    pub fn triangle_vertices(&self) -> [Point; 3] {
        util::triangle_vertices(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use image::RgbaImage;

    #[test]
    fn drag_box_is_direction_independent() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Ellipse] {
            let down_right = Shape::new(kind, Point::new(10, 10), Point::new(50, 50), RED, 3);
            let up_left = Shape::new(kind, Point::new(50, 50), Point::new(10, 10), RED, 3);
            assert_eq!(down_right.bounding_box(), up_left.bounding_box());
        }
    }

    #[test]
    fn triangle_mirrors_end_across_start() {
        let shape = Shape::new(ShapeKind::Triangle, Point::new(0, 0), Point::new(10, 20), BLACK, 1);
        assert_eq!(shape.triangle_vertices()[2], Point::new(-10, 20));
    }

    #[test]
    fn text_font_scales_with_brush_size() {
        let shape = Shape::text(Point::new(30, 40), BLACK, 4, "hello");
        assert_eq!(shape.kind(), ShapeKind::Text);
        assert_eq!(shape.label(), Some("hello"));
        assert_eq!(shape.end(), shape.start());
        assert_eq!(shape.font_size(), 20.0);
    }

    #[test]
    fn zero_stroke_width_is_raised_to_one() {
        let shape = Shape::new(ShapeKind::Line, Point::new(0, 0), Point::new(5, 5), BLACK, 0);
        assert_eq!(shape.stroke_width(), 1);
    }

    #[test]
    fn image_shape_spans_bitmap() {
        let bitmap = Rc::new(Bitmap::new(RgbaImage::new(200, 100)));
        let shape = Shape::image(bitmap);
        assert_eq!(
            shape.bounding_box(),
            Rect {
                x: 0,
                y: 0,
                width: 200,
                height: 100
            }
        );
        assert_eq!(shape.bitmap().map(Bitmap::width), Some(200));
        assert!(shape.label().is_none());
    }
}
