//! Update function for the parameter editor component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ParamEditorComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Merging field edits into the change log (upsert by parameter id).
//! - Exporting the model on demand: logging it to the browser console,
//!   rendering it as JSON in the result panel, and confirming via toast.

use gloo_console::log;
use yew::prelude::*;

use super::helpers::{model_to_json, show_toast};
use super::messages::Msg;
use super::state::ParamEditorComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Returns `true` to re-render the view, `false` to short-circuit when
///   only side effects occur.
pub fn update(
    component: &mut ParamEditorComponent,
    _ctx: &Context<ParamEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateValue {
            param_id,
            name,
            value,
        } => {
            component.apply_edit(param_id, &name, value);
            true
        }
        Msg::ExportModel => {
            let json = model_to_json(&component.model());
            log!("modelo exportado:", json.clone());
            component.exported_json = Some(json);
            show_toast("Modelo generado correctamente.");
            true
        }
        Msg::CloseExport => {
            component.exported_json = None;
            true
        }
    }
}
