//! WebAssembly entry point.

use crate::ui::StudioApp;
use wasm_bindgen::prelude::*;

/// Attaches the studio to `canvas` and starts the render loop.
#[wasm_bindgen]
pub async fn start(canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
    // Route log output to the browser console
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("Starting PNW Art Studio (web)");

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
        )
        .await
}
