//! Document builders: turn the committed layer into SVG, PDF, and PNG bytes.
//!
//! Notes:
//! - SVG is written directly; it is the source for every other format.
//! - PDF goes through `usvg` + `svg2pdf` on all targets.
//! - PNG is rendered with `resvg` on native targets only.

use crate::constants;
use crate::error::ExportError;
use crate::types::{Rgb, Shape, ShapeKind};
use std::fmt::Write as _;

/// The drawable area shapes are placed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentFrame {
    /// Width in user units
    pub width: f32,
    /// Height in user units
    pub height: f32,
    /// Background fill
    pub background: Rgb,
}

impl Default for DocumentFrame {
    fn default() -> Self {
        Self {
            width: constants::CANVAS_WIDTH,
            height: constants::CANVAS_HEIGHT,
            background: Rgb::from_constant(constants::BACKGROUND_HEX),
        }
    }
}

/// Physical page size in points (1/72 in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
}

impl PageSize {
    /// US Letter in landscape orientation.
    pub const LETTER_LANDSCAPE: Self = Self {
        width: constants::PDF_PAGE_WIDTH,
        height: constants::PDF_PAGE_HEIGHT,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER_LANDSCAPE
    }
}

/// How the document is placed on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Uniform scale from document units to points
    pub scale: f32,
    /// The page the document is placed on
    pub page: PageSize,
}

impl PageLayout {
    /// Largest uniform scale at which the whole document fits on the page.
    pub fn fit(frame: &DocumentFrame, page: PageSize) -> Self {
        let scale = (page.width / frame.width.max(1.0)).min(page.height / frame.height.max(1.0));
        Self { scale, page }
    }

    /// Stroke width on the page, never thinner than a hairline.
    pub fn stroke_width(&self, width: f32) -> f32 {
        (width * self.scale).max(constants::PDF_MIN_STROKE_WIDTH)
    }
}

/// Builds an SVG document of the shapes at document size.
///
/// The background is one `<rect>`; every shape becomes exactly one `<circle>`
/// in commit order.
pub fn build_svg(shapes: &[Shape], frame: &DocumentFrame) -> String {
    let mut out = String::new();
    write_header(&mut out, frame.width, frame.height, frame.background);
    for shape in shapes {
        write_shape(&mut out, shape, 1.0, shape.style.stroke_width);
    }
    let _ = writeln!(out, "</svg>");
    out
}

/// Builds the page-sized SVG used as the PDF source.
///
/// Coordinates and radii are scaled by the fitted [`PageLayout`] so that one
/// SVG unit is one point on the page.
pub fn build_pdf_page_svg(shapes: &[Shape], frame: &DocumentFrame, page: PageSize) -> String {
    let layout = PageLayout::fit(frame, page);
    let mut out = String::new();
    write_header(&mut out, page.width, page.height, frame.background);
    for shape in shapes {
        write_shape(&mut out, shape, layout.scale, layout.stroke_width(shape.style.stroke_width));
    }
    let _ = writeln!(out, "</svg>");
    out
}

/// Renders the shapes to a single-page PDF sized to `page`.
pub fn render_pdf(
    shapes: &[Shape],
    frame: &DocumentFrame,
    page: PageSize,
) -> Result<Vec<u8>, ExportError> {
    if !(frame.width > 0.0 && frame.height > 0.0) {
        return Err(ExportError::Pdf(format!(
            "a {}x{} document cannot be placed on a page",
            frame.width, frame.height
        )));
    }
    let svg = build_pdf_page_svg(shapes, frame, page);
    let tree = parse_svg(&svg)?;
    // default page options are 72 dpi: one SVG unit is one PDF point
    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), svg2pdf::PageOptions::default())
        .map_err(|e| ExportError::Pdf(format!("{e:?}")))
}

/// Rasterizes the shapes to PNG bytes at `scale` (clamped to 0.25..=8.0).
#[cfg(not(target_arch = "wasm32"))]
pub fn render_png(shapes: &[Shape], frame: &DocumentFrame, scale: f32) -> Result<Vec<u8>, ExportError> {
    use tiny_skia::{Pixmap, Transform};

    let svg = build_svg(shapes, frame);
    let tree = parse_svg(&svg)?;

    let scale = scale.clamp(0.25, 8.0);
    let out_w = (frame.width * scale).round().max(1.0) as u32;
    let out_h = (frame.height * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(out_w, out_h)
        .ok_or_else(|| ExportError::Raster(format!("cannot allocate {out_w}x{out_h} pixmap")))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| ExportError::Raster(e.to_string()))
}

fn parse_svg(svg: &str) -> Result<usvg::Tree, ExportError> {
    let opt = usvg::Options::default();
    Ok(usvg::Tree::from_data(svg.as_bytes(), &opt)?)
}

fn write_header(out: &mut String, width: f32, height: f32, background: Rgb) {
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = width,
        h = height
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
        width, height, background
    );
}

fn write_shape(out: &mut String, shape: &Shape, scale: f32, stroke_width: f32) {
    match shape.kind {
        ShapeKind::Circle { center, radius } => {
            let _ = writeln!(
                out,
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\" />",
                center.0 * scale,
                center.1 * scale,
                radius * scale,
                shape.style.fill,
                shape.style.stroke,
                stroke_width
            );
        }
    }
}
