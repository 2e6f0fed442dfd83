//! Pixel grids and horizontal run-length compression.
//!
//! A [`PixelGrid`] is a rectangular, row-major block of RGB pixels as handed
//! over by an image decoder. [`PixelGrid::compress`] folds each row into
//! maximal horizontal runs, the form the renderer consumes.

use crate::{ImageTableError, Result};
use std::fmt;

/// An RGB color value.
///
/// Equality and hashing are by component; `Display` renders the CSS hex form
/// `#rrggbb` (lowercase, zero-padded) used throughout the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A horizontal run of `len` consecutive pixels of one color.
///
/// `len` is always at least 1 for runs produced by [`PixelGrid::compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub len: usize,
    pub color: Rgb,
}

/// A rectangular grid of RGB pixels, origin top-left, row-major storage.
///
/// Both dimensions are at least 1 and every row has the same width; the
/// constructors reject anything else, so the compression and rendering
/// stages never see a malformed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Builds a grid from packed RGB bytes (3 bytes per pixel, row-major).
    ///
    /// # Errors
    ///
    /// Returns [`ImageTableError::InvalidDimensions`] if either dimension is
    /// zero, or [`ImageTableError::BufferSizeMismatch`] if `rgb` is not
    /// exactly `width * height * 3` bytes long.
    pub fn from_rgb(rgb: &[u8], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImageTableError::InvalidDimensions { width, height });
        }
        let expected = width * height * 3;
        if rgb.len() != expected {
            return Err(ImageTableError::BufferSizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageTableError::InvalidDimensions`] if there are no rows or
    /// the first row is empty, and [`ImageTableError::RaggedRow`] if any row's
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(ImageTableError::InvalidDimensions { width, height });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ImageTableError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        let pixels = rows.into_iter().flatten().collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Run-length encodes every row.
    ///
    /// Each row becomes its maximal encoding: a single left-to-right pass
    /// merges every stretch of identical adjacent pixels into one [`Run`],
    /// so no two neighboring runs share a color and run lengths sum back to
    /// the row width. Cost is linear in grid area.
    pub fn compress(&self) -> CompressedGrid {
        CompressedGrid {
            rows: self.rows().map(compress_row).collect(),
        }
    }
}

fn compress_row(row: &[Rgb]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &color in row {
        match runs.last_mut() {
            Some(run) if run.color == color => run.len += 1,
            _ => runs.push(Run { len: 1, color }),
        }
    }
    runs
}

/// A run-length encoded pixel grid, one row of [`Run`]s per input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedGrid {
    rows: Vec<Vec<Run>>,
}

impl CompressedGrid {
    /// Wraps raw run rows without validation.
    ///
    /// The renderer re-checks run lengths and row-width sums before emitting
    /// anything, so a malformed grid built here fails at the render boundary
    /// rather than producing broken markup.
    pub fn from_runs(rows: Vec<Vec<Run>>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Run>] {
        &self.rows
    }

    /// Total width in pixels, read from the first row's run lengths.
    pub fn width(&self) -> usize {
        self.rows
            .first()
            .map_or(0, |row| row.iter().map(|run| run.len).sum())
    }

    /// Colors of every run in row-major order, each run counted once.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.rows.iter().flatten().map(|run| run.color)
    }

    /// Expands every run back into individual pixels, the inverse of
    /// [`PixelGrid::compress`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PixelGrid::from_rows`] when the expanded
    /// rows are empty or of unequal width.
    pub fn expand(&self) -> Result<PixelGrid> {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|run| std::iter::repeat(run.color).take(run.len))
                    .collect()
            })
            .collect();
        PixelGrid::from_rows(rows)
    }
}
