//! egui backend for the clock renderer.
//!
//! [`PainterSurface`] adapts an `egui::Painter` to the renderer's
//! [`Surface`] trait, and [`clock_view`] allocates space for one clock,
//! resizes its renderer to that space and draws it.

use crate::geometry::ClockMoment;
use crate::renderer::{ClockRenderer, Frame};
use crate::surface::Surface;
use crate::types::{Argb, Padding, Point};
use eframe::egui;

/// Converts a packed ARGB color to egui's color type.
pub fn to_color32(color: Argb) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

/// Draws renderer output through an egui painter.
///
/// Renderer coordinates are relative to `origin`, the top-left corner of the
/// space the clock was given.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Vec2,
}

impl<'a> PainterSurface<'a> {
    /// Wraps `painter`, placing the renderer's (0, 0) at `origin`.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(point.x, point.y) + self.origin
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Argb) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Argb) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Argb) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn measure_text(&mut self, text: &str, size: f32) -> (f32, f32) {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            egui::FontId::proportional(size),
            egui::Color32::PLACEHOLDER,
        );
        let size = galley.size();
        (size.x, size.y)
    }

    fn draw_text(&mut self, text: &str, top_left: Point, size: f32, color: Argb) {
        let color = to_color32(color);
        let galley =
            self.painter
                .layout_no_wrap(text.to_owned(), egui::FontId::proportional(size), color);
        self.painter.galley(self.to_screen(top_left), galley, color);
    }
}

/// Allocates `size` points in `ui` and draws `renderer` into them.
///
/// The renderer is resized to the allocated rectangle on every call, so the
/// face follows layout changes. `background` fills the whole rectangle first.
pub fn clock_view(
    ui: &mut egui::Ui,
    renderer: &mut ClockRenderer,
    size: egui::Vec2,
    background: Option<Argb>,
    moment: &ClockMoment,
) -> Frame {
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    if let Some(background) = background {
        painter.rect_filled(rect, 0.0, to_color32(background));
    }

    renderer.on_resize(rect.width(), rect.height(), Padding::default());
    let mut surface = PainterSurface::new(&painter, rect.min);
    renderer.draw(&mut surface, moment)
}
