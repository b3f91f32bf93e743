//! Utility functions for colors and canvas geometry.
//!
//! This module provides:
//! - Name-to-color mapping for config files and scripts (constants live in draw::color)
//! - Integer points and drag-normalized bounding boxes
//! - Triangle and ellipse geometry derived from two drag corners

use crate::draw::{Color, color::*};

// ============================================================================
// Points and Bounds
// ============================================================================

/// Integer pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with non-negative width and height.
///
/// Zero-sized rectangles are allowed: a click without drag still produces a
/// shape, it just covers no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Builds the rectangle spanned by two opposite corners.
    ///
    /// Corners are normalized with a component-wise min/max, so all four drag
    /// directions yield the same rectangle. Spans wider than `i32::MAX`
    /// saturate.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            width: a.x.max(b.x).saturating_sub(min_x),
            height: a.y.max(b.y).saturating_sub(min_y),
        }
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Computes the three vertices of the drag triangle.
///
/// The third vertex mirrors `end` horizontally across `start`, keeping `end`'s
/// y coordinate. The result is deliberately not equilateral. A mirrored x
/// beyond the `i32` range is clamped to it.
pub fn triangle_vertices(start: Point, end: Point) -> [Point; 3] {
    let mirrored_x = 2 * i64::from(start.x) - i64::from(end.x);
    let mirrored_x = mirrored_x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    [start, end, Point::new(mirrored_x, end.y)]
}

/// Calculates ellipse parameters from two corner points.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` in floating point so odd spans keep their half
/// pixel instead of shrinking the ellipse.
pub fn ellipse_bounds(a: Point, b: Point) -> (f64, f64, f64, f64) {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    (
        (ax + bx) / 2.0,
        (ay + by) / 2.0,
        (ax - bx).abs() / 2.0,
        (ay - by).abs() / 2.0,
    )
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}
