//! # PNW Art Studio
//!
//! A drawing tool for composing artwork in the style of Pacific Northwest Coast
//! formline design. Press and drag on the canvas to draw a circle centred on
//! the press point; release to commit it.
//!
//! ## Features
//! - Live preview while dragging, committed shapes on a persistent layer
//! - Fill, stroke, and stroke-width controls
//! - Canvas panning and zooming
//! - Export to SVG, single-page PDF (scaled to fit US Letter landscape), and PNG
//! - Runs natively and in the browser (wasm32)

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
pub mod error;
pub mod export;
pub mod interaction;
mod types;
mod ui;
#[cfg(target_arch = "wasm32")]
mod web;

// Re-export public types and functions
pub use error::{ColorParseError, ExportError};
pub use interaction::{DragOutcome, DragTracker, DragVector};
pub use types::*;
pub use ui::{ExportFormat, StudioApp};

/// Runs the studio in a native window.
///
/// Export dialogs are spawned onto the ambient Tokio runtime, so call this
/// from inside one (see `main.rs`).
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use pnw_art_studio::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
///     let _guard = runtime.enter();
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("PNW Art Studio")
            .with_inner_size([
                constants::CANVAS_WIDTH + 40.0,
                constants::CANVAS_HEIGHT + 110.0,
            ]),
        ..Default::default()
    };
    eframe::run_native(
        "PNW Art Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
