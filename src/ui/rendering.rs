//! Canvas rendering for the document and its two shape layers.
//!
//! Layers are painted bottom to top: document background, committed shapes,
//! then the preview shape, all clipped to the document rectangle.

use super::state::StudioApp;
use crate::types::{Shape, ShapeKind};
use eframe::egui;
use eframe::epaint::StrokeKind;

impl StudioApp {
    /// Renders the document background and both layers on the canvas.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_layers(&self, painter: &egui::Painter) {
        let doc_rect = self.document_screen_rect();

        // Frame around the document so it reads as paper on the dark backdrop
        painter.rect_filled(doc_rect.expand(1.0), 0.0, egui::Color32::from_rgb(0x3d, 0x30, 0x28));
        painter.rect_filled(doc_rect, 0.0, egui::Color32::from(self.frame.background));

        let clipped = painter.with_clip_rect(doc_rect.intersect(painter.clip_rect()));
        for shape in &self.layers.committed {
            self.draw_shape(&clipped, shape);
        }
        for shape in &self.layers.preview {
            self.draw_shape(&clipped, shape);
        }

        painter.rect_stroke(
            doc_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_rgb(0x3d, 0x30, 0x28)),
            StrokeKind::Outside,
        );
    }

    /// Paints one shape, scaling geometry and stroke with the zoom level.
    fn draw_shape(&self, painter: &egui::Painter, shape: &Shape) {
        let zoom = self.canvas.zoom_factor;
        let fill = shape.style.fill.to_color32_with_alpha(shape.style.fill_alpha);
        let stroke = egui::Stroke::new(
            shape.style.stroke_width * zoom,
            egui::Color32::from(shape.style.stroke),
        );
        match shape.kind {
            ShapeKind::Circle { center, radius } => {
                let screen_center = self.world_to_screen(egui::pos2(center.0, center.1));
                painter.circle(screen_center, radius * zoom, fill, stroke);
            }
        }
    }
}
