//! View rendering for the parameter editor component.
//!
//! The UI is three stacked panels: one labeled text input per declared
//! parameter, a change-log panel listing the original and current value of
//! every edited parameter, and the export controls (a button that assembles
//! the model plus a JSON result panel).

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::change::ChangeRecord;
use common::model::param::Param;

use super::messages::Msg;
use super::state::ParamEditorComponent;

/// Main view function for the parameter editor component.
pub fn view(component: &ParamEditorComponent, ctx: &Context<ParamEditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="param-editor-root">
            { build_fields(component, link) }
            { build_changes_panel(component) }
            { build_export_controls(component, link) }
        </div>
    }
}

/// Renders one labeled text input per declared parameter, in declared order.
fn build_fields(component: &ParamEditorComponent, link: &Scope<ParamEditorComponent>) -> Html {
    html! {
        <div class="param-fields">
            {
                for component
                    .params
                    .iter()
                    .map(|param| param_field(param, component.current_value(param.id), link))
            }
        </div>
    }
}

/// Renders a single parameter row. Edits dispatch `Msg::UpdateValue` with the
/// parameter's id and name so the update logic can maintain the change log.
fn param_field(param: &Param, value: &str, link: &Scope<ParamEditorComponent>) -> Html {
    let param_id = param.id;
    let name = param.name.clone();
    let oninput = link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::UpdateValue {
            param_id,
            name: name.clone(),
            value,
        }
    });

    html! {
        <div style="display: flex; align-items: center; margin-bottom: 12px;">
            <label
                for={format!("param-input-{}", param.id)}
                style="min-width: 140px; font-weight: bold;"
            >
                { param.name.clone() }
            </label>
            <input
                id={format!("param-input-{}", param.id)}
                type="text"
                value={value.to_string()}
                {oninput}
                style="flex: 1; padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px;"
            />
        </div>
    }
}

/// Renders the change log: one row per edited parameter, or a placeholder
/// message when nothing was edited yet.
fn build_changes_panel(component: &ParamEditorComponent) -> Html {
    let body = if component.changes.is_empty() {
        html! { <p style="color: #888;">{ "Sin cambios" }</p> }
    } else {
        html! {
            <ul style="list-style: none; padding: 0; margin: 0;">
                { for component.changes.iter().map(change_row) }
            </ul>
        }
    };

    html! {
        <div style="margin-top: 20px;">
            <h4 style="margin-bottom: 8px;">{ "Cambios" }</h4>
            { body }
        </div>
    }
}

fn change_row(change: &ChangeRecord) -> Html {
    html! {
        <li style="padding: 4px 0; border-bottom: 1px solid #eee;">
            <strong>{ change.name.clone() }</strong>
            { ": " }
            <span style="color: #d32f2f; text-decoration: line-through;">
                { change.old_value.clone() }
            </span>
            { " \u{2192} " }
            <span style="color: #2e7d32;">{ change.new_value.clone() }</span>
        </li>
    }
}

/// Renders the export button and, after an export, the JSON result panel
/// with a close button.
fn build_export_controls(
    component: &ParamEditorComponent,
    link: &Scope<ParamEditorComponent>,
) -> Html {
    html! {
        <div style="margin-top: 20px;">
            <button
                onclick={link.callback(|_| Msg::ExportModel)}
                style="padding: 8px 16px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer;"
            >
                { "Obtener modelo" }
            </button>
            {
                if let Some(json) = &component.exported_json {
                    html! {
                        <div style="position: relative; margin-top: 12px;">
                            <button
                                onclick={link.callback(|_| Msg::CloseExport)}
                                style="position: absolute; top: 4px; right: 4px; background: none; border: none; cursor: pointer;"
                            >
                                { "✕" }
                            </button>
                            <pre style="background: #fafafa; border: 1px solid #eee; border-radius: 4px; padding: 8px; font-size: 12px; overflow-x: auto;">
                                { json.clone() }
                            </pre>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
