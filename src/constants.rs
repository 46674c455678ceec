//! Shared application-wide constants.
//! Centralizes the document geometry, palette, and interaction thresholds.

// Document
/// Document width in user units (SVG user units map 1:1 to screen points at 100% zoom).
pub const CANVAS_WIDTH: f32 = 800.0;
/// Document height in user units.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Document background, a warm off-white like birch bark.
pub const BACKGROUND_HEX: &str = "#fdf6e3";

// Palette
/// Default fill color (cedar red).
pub const DEFAULT_FILL_HEX: &str = "#c0392b";
/// Default stroke color (charcoal).
pub const DEFAULT_STROKE_HEX: &str = "#1a1a1a";
/// Default stroke width in user units.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;
/// Smallest stroke width offered by the toolbar slider.
pub const MIN_STROKE_WIDTH: f32 = 1.0;
/// Largest stroke width offered by the toolbar slider.
pub const MAX_STROKE_WIDTH: f32 = 20.0;

// Shapes
/// Circles are never smaller than this radius.
pub const MIN_RADIUS: f32 = 1.0;
/// Drags shorter than this distance (in document units) never commit a shape.
pub const MIN_COMMIT_DISTANCE: f32 = 2.0;
/// Alpha applied to the preview fill.
pub const PREVIEW_FILL_ALPHA: u8 = 96;
/// Outline width of the preview shape (in document units).
pub const PREVIEW_STROKE_WIDTH: f32 = 1.0;

// Canvas navigation
/// Lower zoom bound.
pub const MIN_ZOOM: f32 = 0.25;
/// Upper zoom bound.
pub const MAX_ZOOM: f32 = 5.0;
/// Zoom change applied per scroll event.
pub const ZOOM_STEP: f32 = 0.025;

// Paginated export
/// PDF page width in points (US Letter, landscape).
pub const PDF_PAGE_WIDTH: f32 = 792.0;
/// PDF page height in points.
pub const PDF_PAGE_HEIGHT: f32 = 612.0;
/// Hairline floor for scaled stroke widths on the PDF page.
pub const PDF_MIN_STROKE_WIDTH: f32 = 0.5;

// Raster export
/// Default PNG scale factor.
pub const PNG_DEFAULT_SCALE: f32 = 2.0;
