//! User interface components for the studio.
//!
//! This module contains the main application struct, the toolbar, the drawing
//! canvas, and the status bar.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main StudioApp
//! - `canvas` - Canvas navigation, coordinate transforms, and the draw gesture
//! - `rendering` - Painting the document and its layers
//! - `export` - Building export bytes from the committed layer
//! - `file_ops` - Save dialogs (native) and downloads (wasm)

mod canvas;
mod export;
mod file_ops;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::{ExportFormat, StudioApp};

use self::state::STORAGE_KEY;

use crate::constants;
use eframe::egui;

impl eframe::App for StudioApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(STORAGE_KEY, json);
            }
            Err(err) => {
                log::error!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar, status bar, and canvas, and drains finished exports.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_pending_operations(ctx);
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.draw_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl StudioApp {
    /// Escape cancels a drag in progress.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.drag.is_dragging() {
            self.drag.cancel();
            self.layers.clear_preview();
        }
    }

    /// Renders the toolbar: style controls, actions, and view options.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Style controls
            ui.label("Fill:");
            let mut fill = egui::Color32::from(self.style.fill);
            if ui.color_edit_button_srgba(&mut fill).changed() {
                self.style.fill = fill.into();
            }

            ui.label("Stroke:");
            let mut stroke = egui::Color32::from(self.style.stroke);
            if ui.color_edit_button_srgba(&mut stroke).changed() {
                self.style.stroke = stroke.into();
            }

            ui.add(
                egui::Slider::new(
                    &mut self.style.stroke_width,
                    constants::MIN_STROKE_WIDTH..=constants::MAX_STROKE_WIDTH,
                )
                .step_by(1.0)
                .text("Width"),
            );

            ui.separator();

            // Actions
            if ui.button("Clear").clicked() {
                self.clear_canvas();
            }
            if ui.button("Export SVG").clicked() {
                self.request_export(ExportFormat::Svg);
            }
            if ui.button("Export PDF").clicked() {
                self.request_export(ExportFormat::Pdf);
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                if ui.button("Export PNG").clicked() {
                    self.request_export(ExportFormat::Png);
                }
                ui.add(
                    egui::DragValue::new(&mut self.png_scale)
                        .range(0.25..=8.0)
                        .speed(0.25)
                        .suffix("x"),
                );
            }

            ui.separator();

            // View options
            if ui.button("Reset View").clicked() {
                self.canvas.needs_centering = true;
            }
            ui.checkbox(&mut self.dark_mode, "Dark Mode");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Zoom: {:.0}%", self.canvas.zoom_factor * 100.0));
            });
        });
    }

    /// Renders the single-line status bar.
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.status.as_str());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} shape(s)", self.layers.committed.len()));
            });
        });
    }

    /// Renders the canvas and routes pointer input to navigation and drawing.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        if self.canvas.needs_centering {
            self.center_document(response.rect);
        }

        self.handle_canvas_panning(ui, &response);
        self.handle_canvas_zoom(ui, &response);
        self.handle_shape_drawing(ui, &response);

        self.render_layers(&painter);

        if let Some(hover) = response.hover_pos() {
            if self.is_on_document(self.screen_to_world(hover)) {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        }
    }
}
