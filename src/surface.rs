//! Drawing surface abstraction.
//!
//! The renderer only needs five capabilities from whatever it draws into:
//! filled circles, stroked circles, lines, and measured text. Hosts implement
//! [`Surface`] on top of their own painter; [`DisplayList`] records the calls
//! instead and backs both the SVG export and the tests.

use crate::types::{Argb, Point};
use serde::{Deserialize, Serialize};

/// Width of a glyph relative to the font size, for surfaces without a font.
const GLYPH_WIDTH_RATIO: f32 = 0.6;
/// Height of a digit relative to the font size, for surfaces without a font.
const GLYPH_HEIGHT_RATIO: f32 = 0.72;

/// Capabilities a host surface provides to the clock renderer.
pub trait Surface {
    /// Fills a disc.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Argb);

    /// Strokes a circle; the stroke is centered on `radius`.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Argb);

    /// Draws a straight line.
    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Argb);

    /// Returns the `(width, height)` of `text`'s bounding box at `size`.
    fn measure_text(&mut self, text: &str, size: f32) -> (f32, f32);

    /// Draws `text` with its bounding box's top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Point, size: f32, color: Argb);

    /// Factor converting a logical font size to the surface's font unit.
    fn text_scale(&self) -> f32 {
        1.0
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// A filled disc
    FillCircle {
        /// Disc center
        center: Point,
        /// Disc radius
        radius: f32,
        /// Fill color
        color: Argb,
    },
    /// A stroked circle
    StrokeCircle {
        /// Circle center
        center: Point,
        /// Radius of the stroke's centerline
        radius: f32,
        /// Stroke width
        width: f32,
        /// Stroke color
        color: Argb,
    },
    /// A line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke width
        width: f32,
        /// Stroke color
        color: Argb,
    },
    /// A run of text
    Text {
        /// The string drawn
        text: String,
        /// Top-left corner of the bounding box
        top_left: Point,
        /// Bounding box size as measured when drawn
        bounds: (f32, f32),
        /// Font size
        size: f32,
        /// Text color
        color: Argb,
    },
}

impl Primitive {
    /// Color the primitive is painted with.
    pub fn color(&self) -> Argb {
        match self {
            Primitive::FillCircle { color, .. }
            | Primitive::StrokeCircle { color, .. }
            | Primitive::Line { color, .. }
            | Primitive::Text { color, .. } => *color,
        }
    }
}

/// A surface that records every call in order.
///
/// Text is measured with fixed glyph proportions since no font is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
    text_scale: f32,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// Creates an empty list with a text scale of 1.
    pub fn new() -> Self {
        Self::with_text_scale(1.0)
    }

    /// Creates an empty list reporting the given text scale.
    pub fn with_text_scale(text_scale: f32) -> Self {
        Self {
            primitives: Vec::new(),
            text_scale,
        }
    }

    /// Recorded primitives, in drawing order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Replays the recorded calls onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for primitive in &self.primitives {
            match primitive {
                Primitive::FillCircle {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                Primitive::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                } => target.stroke_circle(*center, *radius, *width, *color),
                Primitive::Line {
                    from,
                    to,
                    width,
                    color,
                } => target.draw_line(*from, *to, *width, *color),
                Primitive::Text {
                    text,
                    top_left,
                    size,
                    color,
                    ..
                } => target.draw_text(text, *top_left, *size, *color),
            }
        }
    }
}

impl Surface for DisplayList {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Argb) {
        self.primitives.push(Primitive::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Argb) {
        self.primitives.push(Primitive::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Argb) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn measure_text(&mut self, text: &str, size: f32) -> (f32, f32) {
        let glyphs = text.chars().count() as f32;
        (glyphs * size * GLYPH_WIDTH_RATIO, size * GLYPH_HEIGHT_RATIO)
    }

    fn draw_text(&mut self, text: &str, top_left: Point, size: f32, color: Argb) {
        let bounds = self.measure_text(text, size);
        self.primitives.push(Primitive::Text {
            text: text.to_owned(),
            top_left,
            bounds,
            size,
            color,
        });
    }

    fn text_scale(&self) -> f32 {
        self.text_scale
    }
}
