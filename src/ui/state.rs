//! Application state management structures.
//!
//! This module contains the state structures that track the studio's current
//! UI state: canvas navigation, the drawing layers, the current tool style,
//! and in-flight export operations.

use crate::export::DocumentFrame;
use crate::interaction::DragTracker;
use crate::types::{Layers, ShapeStyle};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Key under which UI preferences are stored in eframe's storage.
pub const STORAGE_KEY: &str = "app_state";

/// Status bar text shown before anything has been drawn.
pub const INITIAL_STATUS: &str = "Click and drag to draw a circle.";

/// State related to canvas navigation and display.
///
/// Tracks the current pan offset and zoom level for the canvas.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasState {
    /// Screen position of the document origin
    #[serde(skip)]
    pub offset: egui::Vec2,
    /// Current zoom level (1.0 = normal, 2.0 = 2x zoom, 0.5 = 50% zoom)
    #[serde(skip)]
    pub zoom_factor: f32,
    /// Centre the document in the canvas on the next frame
    #[serde(skip)]
    pub needs_centering: bool,
    /// Whether the user is currently panning the canvas
    #[serde(skip)]
    pub is_panning: bool,
    /// Last mouse position during panning operation
    #[serde(skip)]
    pub last_pan_pos: Option<egui::Pos2>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            zoom_factor: 1.0,
            needs_centering: true,
            is_panning: false,
            last_pan_pos: None,
        }
    }
}

/// The file formats the committed layer can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Vector document
    Svg,
    /// Single-page document, scaled to fit the page
    Pdf,
    /// Raster image (native builds only)
    Png,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }

    /// Suggested file name in save dialogs and downloads.
    pub fn default_file_name(self) -> String {
        format!("pnw-art.{}", self.extension())
    }

    /// MIME type used for browser downloads.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Svg => "SVG",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Png => "PNG",
        })
    }
}

/// Messages sent from async export operations back to the main app.
#[derive(Debug)]
pub enum ExportResult {
    /// The file was written to the given path
    Saved(ExportFormat, String),
    /// Export failed with an error message
    Failed(ExportFormat, String),
}

/// State related to export operations.
///
/// Exports are requested by the toolbar, started on the next frame, and report
/// back through a channel because native save dialogs are async.
pub struct ExportState {
    /// Export requested by the toolbar and not yet started
    pub pending: Option<ExportFormat>,
    /// Sending half handed to async save tasks
    pub sender: Sender<ExportResult>,
    /// Receiving half drained once per frame
    pub receiver: Receiver<ExportResult>,
}

impl Default for ExportState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            pending: None,
            sender,
            receiver,
        }
    }
}

/// The main application structure containing UI state and the drawing layers.
///
/// This struct implements the `eframe::App` trait. Only the UI preferences
/// (current style, dark mode, PNG scale) survive a restart; the drawing itself
/// always starts empty.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct StudioApp {
    /// Preview and committed shapes
    #[serde(skip)]
    pub layers: Layers,
    /// In-progress pointer drag
    #[serde(skip)]
    pub drag: DragTracker,
    /// The document the shapes are placed in
    #[serde(skip)]
    pub frame: DocumentFrame,
    /// Style applied to the next committed shape
    pub style: ShapeStyle,
    /// Canvas navigation state
    pub canvas: CanvasState,
    /// Export operations state
    #[serde(skip)]
    pub export: ExportState,
    /// Status bar message
    #[serde(skip)]
    pub status: String,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Scale factor for PNG export
    pub png_scale: f32,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            layers: Layers::new(),
            drag: DragTracker::new(),
            frame: DocumentFrame::default(),
            style: ShapeStyle::default(),
            canvas: CanvasState::default(),
            export: ExportState::default(),
            status: INITIAL_STATUS.to_string(),
            dark_mode: true,
            png_scale: crate::constants::PNG_DEFAULT_SCALE,
        }
    }
}

impl StudioApp {
    /// Creates the app, restoring UI preferences from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(STORAGE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("Ignoring unreadable stored preferences: {err}");
                    None
                }
            });
        restored.unwrap_or_default()
    }

    /// Serializes the persisted preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes preferences from JSON; every non-persisted field takes its default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
