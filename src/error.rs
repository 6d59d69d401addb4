//! Error types for style loading and export.

use thiserror::Error;

/// Errors that can occur outside the drawing path.
#[derive(Debug, Error)]
pub enum ClockError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A style table or state blob was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The exported SVG could not be parsed back for rasterising
    #[cfg(not(target_arch = "wasm32"))]
    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    /// The raster target has a zero or oversized dimension
    #[error("cannot allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),

    /// PNG encoding failed
    #[error("PNG encoding error: {0}")]
    Png(String),
}

/// Convenience alias for `Result<T, ClockError>`.
pub type Result<T> = std::result::Result<T, ClockError>;
