//! Export entry points: turn the committed layer into bytes for a chosen format.
//!
//! Notes:
//! - SVG and PDF export are supported on all targets (native + wasm).
//! - PNG export is supported on native targets only.

use super::state::{ExportFormat, StudioApp};
use crate::error::ExportError;
use crate::export::{self as document, PageSize};

impl StudioApp {
    /// Queues an export; it starts on the next frame.
    pub fn request_export(&mut self, format: ExportFormat) {
        self.export.pending = Some(format);
    }

    /// Builds the file contents for `format` from the committed layer.
    pub fn export_bytes(&self, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        let shapes = &self.layers.committed;
        match format {
            ExportFormat::Svg => Ok(document::build_svg(shapes, &self.frame).into_bytes()),
            ExportFormat::Pdf => document::render_pdf(shapes, &self.frame, PageSize::LETTER_LANDSCAPE),
            #[cfg(not(target_arch = "wasm32"))]
            ExportFormat::Png => document::render_png(shapes, &self.frame, self.png_scale),
            #[cfg(target_arch = "wasm32")]
            ExportFormat::Png => Err(ExportError::Raster(
                "PNG export is not available in the browser".to_string(),
            )),
        }
    }
}
