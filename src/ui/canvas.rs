//! Canvas interaction and navigation functionality.
//!
//! This module handles canvas panning, zooming, the circle drag gesture, and
//! coordinate transformations between screen and document space.

use super::state::StudioApp;
use crate::constants;
use crate::interaction::DragOutcome;
use crate::types::Shape;
use eframe::egui;

impl StudioApp {
    /// Converts screen coordinates to document coordinates accounting for zoom and pan.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas.offset) / self.canvas.zoom_factor
    }

    /// Converts document coordinates to screen coordinates accounting for zoom and pan.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        world_pos * self.canvas.zoom_factor + self.canvas.offset
    }

    /// The document rectangle in screen space.
    pub fn document_screen_rect(&self) -> egui::Rect {
        egui::Rect::from_min_max(
            self.world_to_screen(egui::Pos2::ZERO),
            self.world_to_screen(egui::pos2(self.frame.width, self.frame.height)),
        )
    }

    /// Whether a document-space point lies on the document.
    pub fn is_on_document(&self, world_pos: egui::Pos2) -> bool {
        world_pos.x >= 0.0
            && world_pos.y >= 0.0
            && world_pos.x <= self.frame.width
            && world_pos.y <= self.frame.height
    }

    /// Places the document in the middle of `canvas_rect` at 100% zoom.
    pub fn center_document(&mut self, canvas_rect: egui::Rect) {
        self.canvas.zoom_factor = 1.0;
        let size = egui::vec2(self.frame.width, self.frame.height);
        self.canvas.offset = canvas_rect.center().to_vec2() - size * 0.5;
        self.canvas.needs_centering = false;
    }

    /// Handles middle-click or Cmd/Ctrl+left-click canvas panning functionality.
    ///
    /// Uses Cmd on macOS and Ctrl on other platforms for modifier-based panning.
    pub fn handle_canvas_panning(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        // modifiers.command automatically uses Cmd on macOS and Ctrl elsewhere
        let should_pan = ui.input(|i| {
            i.pointer.middle_down() || (i.pointer.primary_down() && i.modifiers.command)
        });

        if should_pan {
            if let Some(current_pos) = response.interact_pointer_pos() {
                if !self.canvas.is_panning {
                    self.canvas.is_panning = true;
                    self.canvas.last_pan_pos = Some(current_pos);
                } else if let Some(last_pos) = self.canvas.last_pan_pos {
                    let delta = current_pos - last_pos;
                    self.canvas.offset += delta;
                    self.canvas.last_pan_pos = Some(current_pos);
                }
            }
        } else {
            self.canvas.is_panning = false;
            self.canvas.last_pan_pos = None;
        }
    }

    /// Handles scroll wheel zooming functionality.
    ///
    /// Zooms in/out while keeping the document point under the cursor fixed.
    /// Only zooms if the cursor is over the canvas.
    pub fn handle_canvas_zoom(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta == 0.0 {
            return;
        }

        let mouse_pos = ui
            .input(|i| i.pointer.hover_pos())
            .or_else(|| response.interact_pointer_pos());
        let Some(mouse_pos) = mouse_pos else {
            return;
        };
        if !response.rect.contains(mouse_pos) {
            return;
        }

        let world_pos_before_zoom = self.screen_to_world(mouse_pos);

        let zoom_delta = if scroll_delta > 0.0 {
            constants::ZOOM_STEP
        } else {
            -constants::ZOOM_STEP
        };
        let old_zoom = self.canvas.zoom_factor;
        self.canvas.zoom_factor =
            (self.canvas.zoom_factor + zoom_delta).clamp(constants::MIN_ZOOM, constants::MAX_ZOOM);

        if (self.canvas.zoom_factor - old_zoom).abs() > f32::EPSILON {
            // Keep the document point under the cursor where it was
            let world_pos_after_zoom = self.world_to_screen(world_pos_before_zoom);
            self.canvas.offset += mouse_pos - world_pos_after_zoom;
        }
    }

    /// Handles the press / drag / release gesture that draws a circle.
    ///
    /// A press on the document starts a drag centred at the press point. While
    /// the button is held the preview layer shows the circle. On release the
    /// circle is committed unless the drag was shorter than two document units.
    ///
    /// Only presses the canvas widget itself receives count; a popup or window
    /// on top of the canvas keeps its pointer input.
    pub fn handle_shape_drawing(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        if self.canvas.is_panning {
            return;
        }

        let (pressed, released, primary_down, command, last_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.modifiers.command,
                i.pointer.interact_pos(),
            )
        });
        let pointer_pos = response.interact_pointer_pos();

        if pressed && !command && response.is_pointer_button_down_on() {
            if let Some(screen_pos) = pointer_pos {
                let world_pos = self.screen_to_world(screen_pos);
                if self.is_on_document(world_pos) {
                    self.drag.press((world_pos.x, world_pos.y));
                }
            }
        }

        if released {
            // A drag only ever starts on the canvas, so any known release point ends it
            let release_pos = pointer_pos.or(last_pos).map(|pos| self.screen_to_world(pos));
            self.finish_drag(release_pos);
            return;
        }

        if !primary_down {
            // The release happened somewhere we never saw it
            if self.drag.is_dragging() {
                self.finish_drag(None);
            }
            return;
        }

        if let Some(screen_pos) = pointer_pos {
            let world_pos = self.screen_to_world(screen_pos);
            if let Some(vector) = self.drag.drag_to((world_pos.x, world_pos.y)) {
                let preview = Shape::circle(vector.start, vector.length(), self.style).preview();
                self.layers.set_preview(preview);
            }
        }
    }

    /// Ends the current drag at `release_pos` (document space).
    ///
    /// With no release position the drag is dropped without committing.
    pub fn finish_drag(&mut self, release_pos: Option<egui::Pos2>) {
        let Some(pos) = release_pos else {
            if self.drag.is_dragging() {
                log::debug!("Dropping drag: pointer released outside the window");
            }
            self.drag.cancel();
            self.layers.clear_preview();
            return;
        };

        match self.drag.release((pos.x, pos.y)) {
            DragOutcome::Commit { center, radius } => {
                self.commit_circle(center, radius);
            }
            DragOutcome::TooShort => {
                self.layers.clear_preview();
                log::debug!("Ignoring short drag at ({:.1}, {:.1})", pos.x, pos.y);
            }
            DragOutcome::Ignored => {}
        }
    }

    /// Commits a circle with the current style and reports it in the status bar.
    pub fn commit_circle(&mut self, center: (f32, f32), radius: f32) {
        let shape = Shape::circle(center, radius, self.style);
        let count = self.layers.commit(shape);
        self.status = format!(
            "Circle: centre ({}, {}), radius {}px | {} shape(s)",
            center.0 as i32, center.1 as i32, radius as i32, count
        );
        log::info!(
            "Committed circle at ({:.1}, {:.1}) r={:.1}; {} shape(s)",
            center.0,
            center.1,
            radius,
            count
        );
    }

    /// Removes every shape from both layers and drops any drag in progress.
    pub fn clear_canvas(&mut self) {
        self.layers.clear();
        self.drag.cancel();
        self.status = "Canvas cleared.".to_string();
        log::info!("Canvas cleared");
    }
}
