//! Fullscreen toggling for the practice screen.
//! The fullscreen flag belongs to the browser; nothing here is stored.

use gloo_utils::document;
use log::{debug, warn};
use wasm_bindgen::JsValue;

/// Enter fullscreen on the document root, or leave it if already active.
pub fn toggle_fullscreen() -> Result<(), JsValue> {
    let doc = document();
    if doc.fullscreen_element().is_some() {
        debug!("Leaving fullscreen");
        doc.exit_fullscreen();
        return Ok(());
    }
    match doc.document_element() {
        Some(root) => {
            debug!("Requesting fullscreen");
            root.request_fullscreen()
        }
        None => Err(JsValue::from_str("document has no root element")),
    }
}

/// Click handler wrapper; browser refusals are logged and otherwise ignored.
pub fn on_fullscreen_click() {
    if let Err(err) = toggle_fullscreen() {
        warn!("Fullscreen toggle failed: {:?}", err);
    }
}
