//! File operations for delivering exported documents.
//!
//! This module handles native save dialogs and WASM-compatible browser
//! downloads, and feeds their outcome back into the status bar.

use super::state::{ExportResult, StudioApp};
use crate::error::ExportError;
use eframe::egui;

impl StudioApp {
    /// Handles pending export operations for both native and WASM platforms.
    ///
    /// Processes completed async operations first, then starts a newly requested one.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for requesting repaints
    pub fn handle_pending_operations(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.export.receiver.try_recv() {
            self.apply_export_result(result);
        }

        let Some(format) = self.export.pending.take() else {
            return;
        };

        let bytes = match self.export_bytes(format) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.apply_export_result(ExportResult::Failed(format, e.to_string()));
                return;
            }
        };
        log::debug!("Built {} export ({} bytes)", format, bytes.len());

        let sender = self.export.sender.clone();

        #[cfg(target_arch = "wasm32")]
        {
            let file_name = format.default_file_name();
            let result = match Self::trigger_download(&file_name, format.mime_type(), &bytes) {
                Ok(()) => ExportResult::Saved(format, file_name),
                Err(e) => ExportResult::Failed(format, e.to_string()),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                if let Some(handle) = rfd::AsyncFileDialog::new()
                    .add_filter(format.to_string(), &[format.extension()])
                    .set_file_name(format.default_file_name())
                    .save_file()
                    .await
                {
                    let path = handle.path();
                    let result = match Self::write_export(path, &bytes) {
                        Ok(()) => ExportResult::Saved(format, path.display().to_string()),
                        Err(e) => ExportResult::Failed(format, e.to_string()),
                    };
                    let _ = sender.send(result);
                } else {
                    log::debug!("{format} export cancelled");
                }
                ctx.request_repaint();
            });
        }
    }

    /// Reports a finished export in the status bar and the log.
    pub fn apply_export_result(&mut self, result: ExportResult) {
        match result {
            ExportResult::Saved(format, path) => {
                log::info!("{format} saved to {path}");
                self.status = format!("{format} saved to {path}");
            }
            ExportResult::Failed(format, error) => {
                log::error!("{format} export failed: {error}");
                self.status = format!("{format} export failed: {error}");
            }
        }
    }

    /// Writes export bytes to the file picked in the save dialog.
    #[cfg(not(target_arch = "wasm32"))]
    fn write_export(path: &std::path::Path, bytes: &[u8]) -> Result<(), ExportError> {
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Triggers a file download in the browser (WASM only, Firefox-compatible).
    ///
    /// Creates a temporary anchor element with a blob URL and triggers a download.
    #[cfg(target_arch = "wasm32")]
    fn trigger_download(file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        use wasm_bindgen::JsCast;

        let fail = |what: &str| ExportError::Download(what.to_string());

        let window = web_sys::window().ok_or_else(|| fail("no window found"))?;
        let document = window.document().ok_or_else(|| fail("no document found"))?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&js_sys::Uint8Array::from(bytes));

        let blob_options = web_sys::BlobPropertyBag::new();
        blob_options.set_type(mime_type);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &blob_options)
            .map_err(|_| fail("failed to create blob"))?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| fail("failed to create object URL"))?;

        let anchor = document
            .create_element("a")
            .map_err(|_| fail("failed to create anchor element"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| fail("failed to cast to anchor element"))?;

        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();

        let body = document.body().ok_or_else(|| fail("no body found"))?;
        body.append_child(&anchor)
            .map_err(|_| fail("failed to append anchor"))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|_| fail("failed to remove anchor"))?;

        web_sys::Url::revoke_object_url(&url).map_err(|_| fail("failed to revoke object URL"))?;

        Ok(())
    }
}
