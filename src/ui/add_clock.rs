//! The add-clock screen: width/height inputs and the list of added clocks.

use super::painter::clock_view;
use super::state::ClockApp;
use crate::geometry::ClockMoment;
use crate::renderer::Frame;
use eframe::egui;
use std::time::Duration;

impl ClockApp {
    /// Draws the add-clock screen.
    ///
    /// Returns the shortest redraw interval requested by the visible clocks.
    pub fn draw_add_clock(&mut self, ui: &mut egui::Ui, moment: &ClockMoment) -> Option<Duration> {
        let mut add_requested = false;

        if let Some(form) = self.add_clock.as_mut() {
            ui.horizontal(|ui| {
                ui.label("Width (dp)");
                ui.add(
                    egui::TextEdit::singleline(&mut form.width_text)
                        .hint_text("auto")
                        .desired_width(60.0),
                );
                ui.label("Height (dp)");
                ui.add(
                    egui::TextEdit::singleline(&mut form.height_text)
                        .hint_text("auto")
                        .desired_width(60.0),
                );
                add_requested = ui.button("Add").clicked();
            });
        }

        if add_requested {
            self.add_clock_from_form();
        }

        let form = self.add_clock.as_mut()?;

        ui.separator();

        let mut next: Option<Duration> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if form.clocks.is_empty() {
                    ui.weak("No clocks yet. Leave a size blank or 0 to use the default size.");
                }
                for clock in &mut form.clocks {
                    let frame = ui
                        .push_id(clock.id, |ui| {
                            clock_view(
                                ui,
                                &mut clock.renderer,
                                clock.size.resolve(),
                                Some(clock.background),
                                moment,
                            )
                        })
                        .inner;
                    if let Frame::Drawn { redraw_within } = frame {
                        next = Some(next.map_or(redraw_within, |d| d.min(redraw_within)));
                    }
                    ui.add_space(8.0);
                }
            });

        next
    }
}
