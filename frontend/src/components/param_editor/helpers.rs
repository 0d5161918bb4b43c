//! Utility functions for the parameter editor component.
//!
//! Responsibilities
//! - **User Feedback**: displaying temporary "toast" notifications to confirm
//!   actions such as exporting the model.
//! - **Serialization**: rendering an exported `Model` as pretty-printed JSON
//!   for the result panel and the browser console.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::Model;

/// Serializes a model to pretty-printed JSON with the external field names
/// (`paramValues`, `paramId`, `colors`).
///
/// Serialization of these plain structs cannot fail in practice; the empty
/// string fallback keeps the caller free of error plumbing.
pub fn model_to_json(model: &Model) -> String {
    serde_json::to_string_pretty(model).unwrap_or_default()
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the DOM for non-blocking feedback.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
