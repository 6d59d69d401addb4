//! Export utilities: render the preview clock to SVG and PNG.
//!
//! Notes:
//! - The face is recorded into a [`DisplayList`] and written out as SVG.
//! - PNG export parses that SVG back with usvg and rasterises it with resvg
//!   (native targets only).

use super::state::ClockApp;
use crate::geometry::ClockMoment;
use crate::renderer::ClockRenderer;
use crate::surface::{DisplayList, Primitive};
use crate::types::{Argb, Padding};
use std::fmt::Write as _;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

/// Options for exporting a clock image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Side of the exported square, in pixels
    pub size: u32,
    /// Raster scale applied on PNG export
    pub png_scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            size: 400,
            png_scale: 1.0,
        }
    }
}

/// Draws `renderer` at `moment` into a `size` x `size` square and returns SVG.
pub fn build_svg(renderer: &ClockRenderer, moment: &ClockMoment, size: u32) -> String {
    let mut renderer = renderer.clone();
    renderer.on_resize(size as f32, size as f32, Padding::default());
    let mut list = DisplayList::new();
    renderer.draw(&mut list, moment);
    display_list_to_svg(&list, size, size)
}

/// Writes recorded primitives as an SVG document.
pub fn display_list_to_svg(list: &DisplayList, width: u32, height: u32) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        width, height, width, height
    );

    for primitive in list.primitives() {
        match primitive {
            Primitive::FillCircle {
                center,
                radius,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\" />",
                    center.x,
                    center.y,
                    radius,
                    hex(*color),
                    opacity(*color)
                );
            }
            Primitive::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{:.2}\" />",
                    center.x,
                    center.y,
                    radius,
                    hex(*color),
                    opacity(*color),
                    width
                );
            }
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{:.2}\" />",
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    hex(*color),
                    opacity(*color),
                    width
                );
            }
            Primitive::Text {
                text,
                top_left,
                bounds,
                size,
                color,
            } => {
                // baseline at the bottom of the measured box
                let _ = writeln!(
                    out,
                    "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\">{}</text>",
                    top_left.x,
                    top_left.y + bounds.1,
                    size,
                    hex(*color),
                    opacity(*color),
                    escape_xml(text)
                );
            }
        }
    }

    let _ = writeln!(out, "</svg>");
    out
}

/// Rasterises an SVG document produced by [`display_list_to_svg`].
#[cfg(not(target_arch = "wasm32"))]
pub fn rasterize(
    svg: &str,
    width: u32,
    height: u32,
    scale: f32,
) -> crate::error::Result<tiny_skia::Pixmap> {
    use crate::error::ClockError;

    let mut opt = usvg::Options::default();
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    opt.fontdb = Arc::new(db);

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

    let scale = scale.clamp(0.25, 8.0);
    let out_w = ((width as f32) * scale).round().max(1.0) as u32;
    let out_h = ((height as f32) * scale).round().max(1.0) as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(out_w, out_h).ok_or(ClockError::Pixmap(out_w, out_h))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

impl ClockApp {
    /// Export the preview clock to SVG via a save dialog.
    pub fn export_svg(&self, options: &ExportOptions) {
        let Some(settings) = &self.settings else {
            return;
        };
        let svg = build_svg(&settings.preview, &ClockMoment::now(), options.size);

        #[cfg(not(target_arch = "wasm32"))]
        {
            tokio::spawn(async move {
                if let Some(handle) = rfd::AsyncFileDialog::new()
                    .add_filter("SVG", &["svg"])
                    .set_file_name("clock.svg")
                    .save_file()
                    .await
                {
                    let path = handle.path();
                    match std::fs::write(path, svg.as_bytes()) {
                        Ok(()) => log::info!("SVG exported to {}", path.display()),
                        Err(e) => log::warn!("Failed to save SVG: {e}"),
                    }
                }
            });
        }
        #[cfg(target_arch = "wasm32")]
        {
            let _ = svg;
            log::warn!("SVG export is not available in the browser");
        }
    }

    /// Export the preview clock to PNG via a save dialog (native builds only).
    pub fn export_png(&self, options: &ExportOptions) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let Some(settings) = &self.settings else {
                return;
            };
            let svg = build_svg(&settings.preview, &ClockMoment::now(), options.size);
            let pixmap = match rasterize(&svg, options.size, options.size, options.png_scale) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("Failed to render PNG: {e}");
                    return;
                }
            };

            tokio::spawn(async move {
                if let Some(handle) = rfd::AsyncFileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name("clock.png")
                    .save_file()
                    .await
                {
                    let path = handle.path();
                    let written = pixmap
                        .encode_png()
                        .map_err(|e| crate::error::ClockError::Png(e.to_string()))
                        .and_then(|bytes| Ok(std::fs::write(path, bytes)?));
                    match written {
                        Ok(()) => log::info!("PNG exported to {}", path.display()),
                        Err(e) => log::warn!("Failed to save PNG: {e}"),
                    }
                }
            });
        }
        #[cfg(target_arch = "wasm32")]
        {
            let _ = options;
        }
    }
}

fn hex(color: Argb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn opacity(color: Argb) -> f32 {
    color.a() as f32 / 255.0
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
