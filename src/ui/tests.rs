use super::state::INITIAL_STATUS;
use super::*;
use crate::types::ShapeKind;
use eframe::egui;

/// Run a single headless egui frame that draws the canvas with the given input events.
fn run_canvas_frame(ctx: &egui::Context, app: &mut StudioApp, events: Vec<egui::Event>) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });
}

/// Like `run_canvas_frame`, but with a foreground area covering `overlay` on top of the canvas.
fn run_frame_with_overlay(
    ctx: &egui::Context,
    app: &mut StudioApp,
    overlay: egui::Rect,
    events: Vec<egui::Event>,
) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
        egui::Area::new(egui::Id::new("popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(overlay.min)
            .show(ctx, |ui| {
                ui.allocate_exact_size(overlay.size(), egui::Sense::click_and_drag());
            });
    });
}

/// Runs a frame that also processes keyboard shortcuts, as `update` does.
fn run_frame_with_shortcuts(ctx: &egui::Context, app: &mut StudioApp, events: Vec<egui::Event>) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        app.handle_shortcuts(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });
}

fn press(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn release(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

/// An app whose document origin sits at the screen origin at 100% zoom, so screen == document.
fn aligned_app() -> StudioApp {
    let mut app = StudioApp::default();
    app.canvas.needs_centering = false;
    app.canvas.offset = egui::Vec2::ZERO;
    app.canvas.zoom_factor = 1.0;
    app
}

#[test]
fn drag_shows_preview_then_commits_circle() {
    let mut app = aligned_app();
    let ctx = egui::Context::default();
    let start = egui::pos2(100.0, 100.0);
    let end = egui::pos2(130.0, 140.0);

    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(start)]);
    run_canvas_frame(&ctx, &mut app, press(start));
    assert!(app.drag.is_dragging());

    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)]);
    assert_eq!(app.layers.preview.len(), 1);
    assert!(app.layers.committed.is_empty());
    assert!(app.layers.preview[0].style.fill_alpha < 255);

    run_canvas_frame(&ctx, &mut app, release(end));
    assert!(app.layers.preview.is_empty());
    assert_eq!(app.layers.committed.len(), 1);
    match app.layers.committed[0].kind {
        ShapeKind::Circle { center, radius } => {
            assert_eq!(center, (100.0, 100.0));
            assert!((radius - 50.0).abs() < 1e-4);
        }
    }
    assert_eq!(app.status, "Circle: centre (100, 100), radius 50px | 1 shape(s)");
}

#[test]
fn short_drag_commits_nothing() {
    let mut app = aligned_app();
    let ctx = egui::Context::default();
    let start = egui::pos2(200.0, 200.0);

    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(start)]);
    run_canvas_frame(&ctx, &mut app, press(start));
    run_canvas_frame(&ctx, &mut app, release(egui::pos2(201.0, 201.0)));

    assert!(app.layers.is_empty());
    assert!(!app.drag.is_dragging());
    assert_eq!(app.status, INITIAL_STATUS);
}

#[test]
fn press_outside_document_does_not_start_drag() {
    let mut app = aligned_app();
    let ctx = egui::Context::default();
    // Document spans 0..800 x 0..600; the canvas is wider
    let outside = egui::pos2(1000.0, 300.0);

    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(outside)]);
    run_canvas_frame(&ctx, &mut app, press(outside));
    assert!(!app.drag.is_dragging());

    run_canvas_frame(&ctx, &mut app, release(egui::pos2(1100.0, 300.0)));
    assert!(app.layers.is_empty());
}

#[test]
fn drag_inside_popup_does_not_draw() {
    let mut app = aligned_app();
    let ctx = egui::Context::default();
    let popup = egui::Rect::from_min_max(egui::pos2(100.0, 100.0), egui::pos2(300.0, 300.0));
    let start = egui::pos2(150.0, 150.0);
    let end = egui::pos2(250.0, 250.0);

    // Let the popup settle for a couple of frames so it is laid out and hit-testable
    run_frame_with_overlay(&ctx, &mut app, popup, Vec::new());
    run_frame_with_overlay(&ctx, &mut app, popup, vec![egui::Event::PointerMoved(start)]);
    run_frame_with_overlay(&ctx, &mut app, popup, press(start));
    assert!(!app.drag.is_dragging());

    run_frame_with_overlay(&ctx, &mut app, popup, vec![egui::Event::PointerMoved(end)]);
    assert!(app.layers.preview.is_empty());

    run_frame_with_overlay(&ctx, &mut app, popup, release(end));
    assert_eq!(app.layers.committed.len(), 0);
    assert_eq!(app.status, INITIAL_STATUS);
}

#[test]
fn escape_cancels_drag_in_progress() {
    let mut app = aligned_app();
    let ctx = egui::Context::default();
    let start = egui::pos2(100.0, 100.0);
    let end = egui::pos2(160.0, 180.0);

    run_frame_with_shortcuts(&ctx, &mut app, vec![egui::Event::PointerMoved(start)]);
    run_frame_with_shortcuts(&ctx, &mut app, press(start));
    run_frame_with_shortcuts(&ctx, &mut app, vec![egui::Event::PointerMoved(end)]);
    assert!(app.drag.is_dragging());
    assert_eq!(app.layers.preview.len(), 1);

    run_frame_with_shortcuts(
        &ctx,
        &mut app,
        vec![egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
    );
    assert!(!app.drag.is_dragging());
    assert!(app.layers.preview.is_empty());

    run_frame_with_shortcuts(&ctx, &mut app, release(end));
    assert!(app.layers.committed.is_empty());
}

#[test]
fn drag_respects_zoom_and_pan() {
    let mut app = aligned_app();
    app.canvas.offset = egui::vec2(50.0, 20.0);
    app.canvas.zoom_factor = 2.0;
    let ctx = egui::Context::default();

    // Screen (250, 220) is document (100, 100); screen (310, 300) is document (130, 140)
    let start = egui::pos2(250.0, 220.0);
    let end = egui::pos2(310.0, 300.0);
    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(start)]);
    run_canvas_frame(&ctx, &mut app, press(start));
    run_canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)]);
    run_canvas_frame(&ctx, &mut app, release(end));

    assert_eq!(app.layers.committed.len(), 1);
    match app.layers.committed[0].kind {
        ShapeKind::Circle { center, radius } => {
            assert_eq!(center, (100.0, 100.0));
            assert!((radius - 50.0).abs() < 1e-4);
        }
    }
}

#[test]
fn first_frame_centers_document() {
    let mut app = StudioApp::default();
    let ctx = egui::Context::default();
    run_canvas_frame(&ctx, &mut app, Vec::new());

    assert!(!app.canvas.needs_centering);
    let doc = app.document_screen_rect();
    assert!((doc.width() - 800.0).abs() < 1e-3);
    assert!((doc.height() - 600.0).abs() < 1e-3);
}

#[test]
fn exported_svg_matches_committed_layer() {
    let mut app = aligned_app();
    for i in 0..4 {
        app.commit_circle((100.0 + i as f32 * 50.0, 200.0), 20.0);
    }
    let bytes = app.export_bytes(ExportFormat::Svg).unwrap();
    let svg = String::from_utf8(bytes).unwrap();
    assert_eq!(svg.matches("<circle").count(), app.layers.committed.len());

    app.clear_canvas();
    let svg = String::from_utf8(app.export_bytes(ExportFormat::Svg).unwrap()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn pdf_export_bytes_are_a_pdf() {
    let mut app = aligned_app();
    app.commit_circle((400.0, 300.0), 120.0);
    let bytes = app.export_bytes(ExportFormat::Pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn preferences_persist_but_drawing_does_not() {
    let mut app = aligned_app();
    app.dark_mode = false;
    app.style.stroke_width = 9.0;
    app.style.fill = crate::types::Rgb::new(0x11, 0x22, 0x33);
    app.commit_circle((10.0, 10.0), 5.0);

    let json = app.to_json().unwrap();
    let restored = StudioApp::from_json(&json).unwrap();

    assert!(!restored.dark_mode);
    assert_eq!(restored.style.stroke_width, 9.0);
    assert_eq!(restored.style.fill.to_hex(), "#112233");
    assert_eq!(restored.style.fill_alpha, 255);
    assert!(restored.layers.committed.is_empty());
    assert_eq!(restored.status, INITIAL_STATUS);
    assert!(restored.canvas.needs_centering);
}
