//! # imagetable
//!
//! Renders raster images as HTML/CSS markup: every run of identical adjacent
//! pixels becomes a small floated element, and colors that repeat often enough
//! share a generated style class instead of carrying an inline declaration.
//! The result is a compact, human-inspectable, text-only reproduction of the
//! image that needs no embedded bitmap.
//!
//! ## Quick Start
//!
//! ### Encoding packed RGB bytes
//!
//! ```rust
//! use imagetable::{html_encode, EncodeOptions};
//!
//! // RGB image data (3 bytes per pixel): two red pixels side by side
//! let rgb = vec![255u8, 0, 0, 255, 0, 0];
//! let html = html_encode(&rgb, 2, 1, &EncodeOptions::default())?;
//! assert!(html.starts_with("<html>"));
//! assert!(html.ends_with("</body></html>"));
//! # Ok::<(), imagetable::ImageTableError>(())
//! ```
//!
//! ### Working with the grid directly
//!
//! ```rust
//! use imagetable::{PixelGrid, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let grid = PixelGrid::from_rows(vec![vec![red, red, red]])?;
//! let compressed = grid.compress();
//! assert_eq!(compressed.rows()[0].len(), 1); // one run of three pixels
//! # Ok::<(), imagetable::ImageTableError>(())
//! ```
//!
//! The pipeline is single-threaded and fully materialized: grid construction,
//! run compression, color frequency ranking, class assignment, and rendering
//! each consume a finished input and produce a finished output. No partial
//! markup is ever produced on failure.

use thiserror::Error;

pub mod encoder;
pub mod grid;
pub mod palette;

pub use encoder::{
    html_encode, html_encode_default, html_encode_grid, render_html, EncodeOptions,
    FrequencySource,
};
pub use grid::{CompressedGrid, PixelGrid, Rgb, Run};
pub use palette::{rank_colors, ClassMap, LabelSequence};

/// Errors that can occur while building or rendering a pixel grid.
#[derive(Debug, Error)]
pub enum ImageTableError {
    /// Invalid image dimensions (width or height is zero)
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A row's width differs from the first row's width
    #[error("ragged row {row}: expected width {expected}, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A compressed row contains a zero-length run
    #[error("empty run in row {row}")]
    EmptyRun { row: usize },
}

/// Result type for imagetable operations.
pub type Result<T> = core::result::Result<T, ImageTableError>;

// Defaults used by `EncodeOptions`
pub(crate) const DEFAULT_CONTAINER: &str = "image";
pub(crate) const DEFAULT_THRESHOLD: usize = 2;
