#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=debug shows every drag outcome
    env_logger::init();
    log::info!("Starting PNW Art Studio");

    // Save dialogs run on this runtime
    let runtime = tokio::runtime::Runtime::new().map_err(|e| {
        log::error!("Failed to start async runtime: {e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;
    let _guard = runtime.enter();

    pnw_art_studio::run_app()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build starts through `start` in the library
}
