//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::{Shape, ShapeKind};
use crate::util::{self, Point};
use log::warn;

/// Fills the entire canvas with a solid background color.
///
/// Should be called before rendering shapes. Saved images always use white.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    color.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the surface as-is
    ctx.restore().ok();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
/// Rendering never touches the shapes themselves, so repeated calls with the
/// same input produce the same pixels.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shapes` - Slice of shapes to render
/// * `font` - Font used for text labels
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], font: &FontDescriptor) {
    for shape in shapes {
        render_shape(ctx, shape, font);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches on the shape kind. Circle and Ellipse share one code path: both
/// fill the drag box, neither is constrained to equal radii.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, font: &FontDescriptor) {
    let color = shape.color();
    let thick = shape.stroke_width() as f64;

    match shape.kind() {
        ShapeKind::Line | ShapeKind::Sketch => {
            render_line(ctx, shape.start(), shape.end(), color, thick);
        }
        ShapeKind::Rectangle => render_rect(ctx, shape, color, thick),
        ShapeKind::Circle | ShapeKind::Ellipse => render_ellipse(ctx, shape, color, thick),
        ShapeKind::Triangle => render_polygon(ctx, &shape.triangle_vertices(), color, thick),
        ShapeKind::Text => {
            if let Some(label) = shape.label() {
                render_text(ctx, shape.start(), label, color, shape.font_size(), font);
            }
        }
        ShapeKind::Image => render_image(ctx, shape),
    }
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, start: Point, end: Point, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(start.x as f64, start.y as f64);
    ctx.line_to(end.x as f64, end.y as f64);
    let _ = ctx.stroke();
}

/// Render a rectangle (outline)
fn render_rect(ctx: &cairo::Context, shape: &Shape, color: Color, thick: f64) {
    let rect = shape.bounding_box();

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in the drag box using Cairo's arc with scaling
fn render_ellipse(ctx: &cairo::Context, shape: &Shape, color: Color, thick: f64) {
    let (cx, cy, rx, ry) = util::ellipse_bounds(shape.start(), shape.end());
    if rx == 0.0 || ry == 0.0 {
        return;
    }

    color.apply(ctx);
    ctx.set_line_width(thick);

    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render a closed polygon outline through the given vertices
fn render_polygon(ctx: &cairo::Context, vertices: &[Point], color: Color, thick: f64) {
    let Some((first, rest)) = vertices.split_first() else {
        return;
    };

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.move_to(first.x as f64, first.y as f64);
    for vertex in rest {
        ctx.line_to(vertex.x as f64, vertex.y as f64);
    }
    ctx.close_path();
    let _ = ctx.stroke();
}

/// Renders a text label using Pango.
///
/// The position is the baseline start of the first line. `size` is applied as
/// an absolute pixel size so labels look the same regardless of the font
/// resolution configured for the Cairo context.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `position` - Baseline start of the text
/// * `text` - Text content to render (may contain '\n' for line breaks)
/// * `color` - Text color
/// * `size` - Font size in points
/// * `font` - Font configuration (family, weight, style)
pub fn render_text(
    ctx: &cairo::Context,
    position: Point,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) {
    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);

    let mut font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    font_desc.set_absolute_size(size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango measures from top-left, labels are anchored at the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;

    color.apply(ctx);
    ctx.move_to(position.x as f64, position.y as f64 - baseline);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Paints a loaded bitmap scaled into its shape's bounding box
fn render_image(ctx: &cairo::Context, shape: &Shape) {
    let Some(bitmap) = shape.bitmap() else {
        return;
    };
    let rect = shape.bounding_box();
    if !rect.is_valid() || bitmap.width() == 0 || bitmap.height() == 0 {
        return;
    }

    let surface = match bitmap.surface() {
        Ok(surface) => surface,
        Err(err) => {
            warn!("Skipping image that cannot be converted for drawing: {}", err);
            return;
        }
    };

    ctx.save().ok();
    ctx.translate(rect.x as f64, rect.y as f64);
    ctx.scale(
        rect.width as f64 / bitmap.width() as f64,
        rect.height as f64 / bitmap.height() as f64,
    );
    if ctx.set_source_surface(surface, 0.0, 0.0).is_ok() {
        let _ = ctx.paint();
    }
    ctx.restore().ok();
}
