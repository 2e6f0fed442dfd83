//! HTML/CSS encoder for pixel grids.
//!
//! Emits a self-contained document: a style block with one rule per shared
//! color class plus the container sizing rules, then a body where every
//! horizontal run becomes one floated `<a>` element. Elements tile
//! left-to-right, top-to-bottom purely through the 1x1 base rule and the
//! container width, so no per-element positioning is needed.

use crate::grid::{CompressedGrid, PixelGrid, Rgb, Run};
use crate::palette::{rank_colors, ClassMap, LabelSequence};
use crate::{ImageTableError, Result, DEFAULT_CONTAINER, DEFAULT_THRESHOLD};

/// Which pixel source feeds the color frequency count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencySource {
    /// Count every pixel of the raw grid: a run of length 4 counts 4 times.
    #[default]
    Pixels,
    /// Count each compressed run once, regardless of its length.
    Runs,
}

/// Options for the HTML encoder.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Class name of the container element (default `"image"`). All generated
    /// rules are scoped under it, so several converted images can share one
    /// document without label collisions.
    pub container: String,

    /// Minimum occurrence count for a color to receive a shared class
    /// (default 2). Colors below the threshold are styled inline.
    pub threshold: usize,

    /// Pixel source for frequency counting (default counts raw pixels).
    pub frequency: FrequencySource,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            threshold: DEFAULT_THRESHOLD,
            frequency: FrequencySource::Pixels,
        }
    }
}

/// Encode packed RGB image data into an HTML document.
///
/// # Arguments
/// * `rgb` - Raw RGB pixel data (3 bytes per pixel: R, G, B)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `opts` - Encoding options
///
/// # Errors
///
/// Returns [`ImageTableError::InvalidDimensions`] or
/// [`ImageTableError::BufferSizeMismatch`] when `rgb` and the dimensions
/// disagree; nothing is emitted on failure.
///
/// # Example
/// ```rust
/// use imagetable::{html_encode, EncodeOptions};
///
/// let rgb = vec![255u8, 0, 0, 255, 0, 0]; // 2x1, both pixels red
/// let html = html_encode(&rgb, 2, 1, &EncodeOptions::default())?;
/// assert!(html.contains("width:2px"));
/// # Ok::<(), imagetable::ImageTableError>(())
/// ```
#[must_use = "this returns the rendered HTML document"]
pub fn html_encode(
    rgb: &[u8],
    width: usize,
    height: usize,
    opts: &EncodeOptions,
) -> Result<String> {
    let grid = PixelGrid::from_rgb(rgb, width, height)?;
    html_encode_grid(&grid, opts)
}

/// Encode packed RGB data with default options.
#[inline]
#[must_use = "this returns the rendered HTML document"]
pub fn html_encode_default(rgb: &[u8], width: usize, height: usize) -> Result<String> {
    html_encode(rgb, width, height, &EncodeOptions::default())
}

/// Encode an already-built [`PixelGrid`].
///
/// Runs the full pipeline: run compression, frequency ranking over the
/// source selected by `opts.frequency`, class assignment, rendering.
#[must_use = "this returns the rendered HTML document"]
pub fn html_encode_grid(grid: &PixelGrid, opts: &EncodeOptions) -> Result<String> {
    let compressed = grid.compress();
    let ranked = match opts.frequency {
        FrequencySource::Pixels => rank_colors(grid.pixels().iter().copied(), opts.threshold),
        FrequencySource::Runs => rank_colors(compressed.colors(), opts.threshold),
    };
    let mut labels = LabelSequence::new();
    let classes = ClassMap::assign(&ranked, &mut labels);
    render_html(&compressed, &classes, &opts.container)
}

/// Renders a compressed grid and its class map into a complete document.
///
/// Fragment order is fixed: document open, style block, body block, document
/// close, with no whitespace in between. Within the style block: the
/// container width rule, the 1x1 base rule, then one background rule per
/// class-map entry in assignment order. Within the body: one element per run
/// in row-major order, carrying a `class` reference when the run's color has
/// one (the `class` attribute always precedes `style`) and an inline `width`
/// whenever the run is longer than one pixel.
///
/// # Errors
///
/// The grid is validated before anything is emitted:
/// [`ImageTableError::EmptyRun`] for a zero-length run and
/// [`ImageTableError::RaggedRow`] when a row's lengths don't sum to the
/// first row's total.
pub fn render_html(grid: &CompressedGrid, classes: &ClassMap, container: &str) -> Result<String> {
    let width = validate_grid(grid)?;

    let mut out = String::new();
    out.push_str("<html><head><style>");
    write_style_fragment(&mut out, width, classes, container);
    out.push_str("</style><body>");
    write_body_fragment(&mut out, grid, classes, container);
    out.push_str("</body></html>");
    Ok(out)
}

// Checks every run and row before any output exists: run lengths must be
// positive and each row must sum to the first row's width.
fn validate_grid(grid: &CompressedGrid) -> Result<usize> {
    let width = grid.width();
    for (y, row) in grid.rows().iter().enumerate() {
        let mut sum = 0;
        for run in row {
            if run.len == 0 {
                return Err(ImageTableError::EmptyRun { row: y });
            }
            sum += run.len;
        }
        if sum != width {
            return Err(ImageTableError::RaggedRow {
                row: y,
                expected: width,
                actual: sum,
            });
        }
    }
    Ok(width)
}

fn write_style_fragment(out: &mut String, width: usize, classes: &ClassMap, container: &str) {
    out.push_str("p.");
    out.push_str(container);
    out.push_str("{width:");
    write_number(out, width);
    out.push_str("px;}p.");
    out.push_str(container);
    out.push_str(" a{float:left;width:1px;height:1px;padding:0;margin:0}");

    for (color, label) in classes.iter() {
        out.push_str("p.");
        out.push_str(container);
        out.push_str(" .");
        out.push_str(label);
        out.push_str("{background:");
        write_hex_color(out, color);
        out.push('}');
    }
}

fn write_body_fragment(
    out: &mut String,
    grid: &CompressedGrid,
    classes: &ClassMap,
    container: &str,
) {
    out.push_str("<p class=\"");
    out.push_str(container);
    out.push_str("\">");
    for row in grid.rows() {
        for run in row {
            write_cell(out, run, classes);
        }
    }
    out.push_str("</p>");
}

fn write_cell(out: &mut String, run: &Run, classes: &ClassMap) {
    out.push_str("<a");
    match classes.get(run.color) {
        Some(label) => {
            out.push_str(" class=\"");
            out.push_str(label);
            out.push('"');
            // width is always inline, even for classed colors
            if run.len > 1 {
                out.push_str(" style=\"width:");
                write_number(out, run.len);
                out.push_str("px\"");
            }
        }
        None => {
            out.push_str(" style=\"background:");
            write_hex_color(out, run.color);
            if run.len > 1 {
                out.push_str(";width:");
                write_number(out, run.len);
                out.push_str("px");
            }
            out.push('"');
        }
    }
    out.push_str("/>");
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// CSS hex form, lowercase, zero-padded
fn write_hex_color(out: &mut String, color: Rgb) {
    out.push('#');
    for byte in [color.r, color.g, color.b] {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0xf) as usize] as char);
    }
}

/// Fast number to string without allocation
#[inline]
fn write_number(out: &mut String, mut n: usize) {
    if n == 0 {
        out.push('0');
        return;
    }

    let mut buf = [0u8; 20];
    let mut i = buf.len();

    while n > 0 {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
    }

    out.push_str(unsafe { std::str::from_utf8_unchecked(&buf[i..]) });
}
