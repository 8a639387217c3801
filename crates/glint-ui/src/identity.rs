//! Bindings for the Google Identity Services sign-in widget.
//!
//! Interface contract over the external `google.accounts.id` surface; the
//! widget script itself is loaded by the host page. No sign-in flow is
//! implemented here.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `google.accounts.id.initialize(config)`.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"])]
    pub fn initialize(config: &JsValue);

    /// `google.accounts.id.renderButton(parent, options)`.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    pub fn render_button(parent: &web_sys::HtmlElement, options: &JsValue);

    /// `google.accounts.id.disableAutoSelect()`.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = disableAutoSelect)]
    pub fn disable_auto_select();

    /// `google.accounts.id.revoke(hint, callback)`.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"])]
    pub fn revoke(hint: &str, callback: &js_sys::Function);

    /// `google.accounts.id.prompt()`.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"])]
    pub fn prompt();
}

/// Payload delivered to the `initialize` callback after a sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialResponse {
    /// The ID token issued by the widget.
    pub credential: String,

    /// How the credential was selected (e.g. "btn", "auto").
    pub select_by: String,
}
