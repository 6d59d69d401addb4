//! User interface for the analog clock application.
//!
//! This module hosts the clock renderer inside an eframe window: the color
//! settings screen, the add-clock screen, and the frame loop that keeps every
//! visible clock redrawing.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main ClockApp
//! - `painter` - egui implementation of the renderer's drawing surface
//! - `settings` - The color settings screen
//! - `add_clock` - The add-clock screen
//! - `export` - SVG and PNG export of the preview clock

mod add_clock;
mod export;
mod painter;
mod settings;
mod state;

pub use export::{build_svg, display_list_to_svg, ExportOptions};
#[cfg(not(target_arch = "wasm32"))]
pub use export::rasterize;
pub use painter::{clock_view, to_color32, PainterSurface};
pub use state::{
    parse_dimension, AddClockState, BackStackEntry, ClockApp, ClockId, ClockInstance, ClockSize,
    Screen, SettingsState,
};

use crate::constants::{APP_STATE_KEY, REDRAW_INTERVAL};
use crate::geometry::ClockMoment;
use eframe::egui;
use std::time::Duration;

impl eframe::App for ClockApp {
    /// Persist the shell preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(APP_STATE_KEY, json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Restore native window size once per session (desktop only)
        #[cfg(not(target_arch = "wasm32"))]
        {
            if !self.applied_viewport_restore {
                if let Some((w, h)) = self.window_inner_size {
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
                }
                self.applied_viewport_restore = true;
            }
            let size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));
            if let Some(size) = size {
                self.window_inner_size = Some((size.x, size.y));
            }
        }

        self.show(ctx);
    }
}

impl ClockApp {
    /// Restores persisted preferences from eframe storage, if any.
    pub fn restore(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(APP_STATE_KEY)) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(app) => app,
            Err(err) => {
                log::warn!("Discarding unreadable app state: {err}");
                Self::default()
            }
        }
    }

    /// Lays out one frame of the whole UI and schedules the next one.
    ///
    /// The current time is sampled once and shared by every clock drawn in
    /// this frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        let moment = ClockMoment::now();
        let next = egui::CentralPanel::default()
            .show(ctx, |ui| match self.screen {
                Screen::ColorSettings => self.draw_settings(ui, &moment).redraw_within(),
                Screen::AddClock => self.draw_add_clock(ui, &moment),
            })
            .inner;

        ctx.request_repaint_after(next_repaint(next));
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let back_enabled = self.screen == Screen::AddClock;
            if ui
                .add_enabled(back_enabled, egui::Button::new("⬅ Back"))
                .clicked()
            {
                self.navigate_back();
            }

            ui.heading(match self.screen {
                Screen::ColorSettings => "Clock colors",
                Screen::AddClock => "Add clock",
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_label = if self.dark_mode { "☀ Light" } else { "🌙 Dark" };
                if ui.button(theme_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                }

                if self.screen == Screen::ColorSettings {
                    let options = ExportOptions::default();
                    if ui.button("Export PNG…").clicked() {
                        self.export_png(&options);
                    }
                    if ui.button("Export SVG…").clicked() {
                        self.export_svg(&options);
                    }
                }
            });
        });
    }
}

/// Delay before the next frame: the clocks' request, capped at the redraw
/// interval so the loop keeps running even when nothing was drawn.
fn next_repaint(requested: Option<Duration>) -> Duration {
    requested.map_or(REDRAW_INTERVAL, |d| d.min(REDRAW_INTERVAL))
}

#[cfg(test)]
mod tests;
