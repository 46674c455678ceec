//! Error types for color parsing and document export.

use thiserror::Error;

/// Errors produced when parsing a `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not have exactly six hex digits after the optional `#`.
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// Errors produced while turning the committed layer into an exported file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The generated SVG could not be parsed back into a render tree.
    #[error("could not parse generated SVG: {0}")]
    Parse(#[from] usvg::Error),
    /// SVG-to-PDF conversion failed.
    #[error("PDF conversion failed: {0}")]
    Pdf(String),
    /// The raster target could not be allocated or encoded.
    #[error("rasterization failed: {0}")]
    Raster(String),
    /// Writing the output file failed.
    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),
    /// The browser refused to start the download.
    #[error("download failed: {0}")]
    Download(String),
}
