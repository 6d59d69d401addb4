//! The color settings screen: a live preview clock and one slider per element.

use super::painter::{clock_view, to_color32};
use super::state::ClockApp;
use crate::constants::PRESET_COLORS;
use crate::geometry::ClockMoment;
use crate::renderer::Frame;
use crate::types::{Argb, ClockElement};
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Largest side of the preview clock, in points.
const PREVIEW_MAX_SIZE: f32 = 260.0;

impl ClockApp {
    /// Draws the settings screen and returns the preview clock's frame.
    pub fn draw_settings(&mut self, ui: &mut egui::Ui, moment: &ClockMoment) -> Frame {
        let Some(settings) = self.settings.as_mut() else {
            return Frame::Skipped;
        };

        let side = ui.available_width().min(PREVIEW_MAX_SIZE);
        let frame = ui
            .vertical_centered(|ui| {
                clock_view(ui, &mut settings.preview, egui::vec2(side, side), None, moment)
            })
            .inner;

        ui.add_space(12.0);

        egui::Grid::new("color_settings_grid")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for element in ClockElement::ALL {
                    let mut position = settings.slider_positions[element.index()];
                    ui.label(element.label());
                    let response = ui.add(
                        egui::Slider::new(&mut position, 0..=PRESET_COLORS.len() - 1)
                            .show_value(false),
                    );
                    if response.changed() {
                        settings.set_slider(element, position);
                    }
                    let (color, name) = settings.swatch(element);
                    color_swatch(ui, color, name);
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        if ui.button("Next").clicked() {
            self.navigate_to_add_clock();
        }

        frame
    }
}

/// A small filled square with the color's preset name.
fn color_swatch(ui: &mut egui::Ui, color: Argb, name: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, to_color32(color));
        ui.painter().rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.fg_stroke.color),
            StrokeKind::Inside,
        );
        ui.label(name);
    });
}
