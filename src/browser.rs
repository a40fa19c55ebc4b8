use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{ClientConfig, EMBEDDED_RESULT_ID, MOUNT_ID};
use crate::error::{js_message, ClientError};
use crate::types::TriageResponse;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ClientError> {
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| ClientError::Unavailable(format!("clipboard ({})", js_message(&e))))
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// The element the server rendered for the app to mount into.
pub fn mount_element() -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

pub fn read_config() -> ClientConfig {
    document()
        .and_then(|doc| doc.get_element_by_id(MOUNT_ID))
        .map(|el| ClientConfig::from_element(&el))
        .unwrap_or_default()
}

/// Result the server embedded when it rendered the page after a form post.
pub fn embedded_result() -> Option<TriageResponse> {
    let raw = document()?
        .get_element_by_id(EMBEDDED_RESULT_ID)?
        .text_content()?;
    TriageResponse::from_embedded(&raw)
}
