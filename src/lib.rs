//! # Analog Clock
//!
//! An analog clock face renderer with a small desktop host around it.
//!
//! The renderer draws a clock face into any [`Surface`]:
//! - **Dial**: inner background disc, outer ring, sixty minute marks and the numerals 1-12
//! - **Hands**: hour, minute and second hands derived from the current time
//! - **Palette**: one independently configurable color per element
//!
//! ## Features
//! - Proportional layout that keeps the face legible at any surface size
//! - Palette save/restore with per-element default fallback
//! - Construction-time style tables loaded from JSON
//! - An egui application with a color settings screen and an add-clock screen
//! - SVG and PNG export of the configured face

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod error;
mod geometry;
mod renderer;
mod surface;
mod types;
pub mod ui;

// Re-export public types and functions
pub use error::{ClockError, Result};
pub use geometry::*;
pub use renderer::*;
pub use surface::*;
pub use types::*;
use ui::ClockApp;

/// Loads the style table named by the `ANALOG_CLOCK_STYLE` environment variable.
///
/// Returns the default style when the variable is unset or the file cannot be
/// read; the failure is logged.
pub fn style_from_env() -> ClockStyle {
    let Some(path) = std::env::var_os(constants::STYLE_ENV_VAR) else {
        return ClockStyle::default();
    };
    match ClockStyle::load(&path) {
        Ok(style) => {
            log::info!("Loaded clock style from {}", path.to_string_lossy());
            style
        }
        Err(err) => {
            log::warn!(
                "Ignoring clock style {}: {err}",
                path.to_string_lossy()
            );
            ClockStyle::default()
        }
    }
}

/// Runs the clock application with default settings.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use analog_clock::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> std::result::Result<(), eframe::Error> {
    let style = style_from_env();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Analog Clock",
        options,
        Box::new(move |cc| {
            let mut app = ClockApp::restore(cc.storage);
            app.set_style(style);
            Ok(Box::new(app))
        }),
    )
}
