use common::model::color::Color;
use common::model::param::{Param, ParamType};
use common::model::param_value::ParamValue;
use common::model::Model;
use yew::{html, Component, Context, Html};

use crate::components::param_editor::ParamEditorComponent;
use crate::page_frame::PageFrame;

/// Page shell: supplies the sample data and renders the editor. Holds no
/// state of its own.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let params = sample_params();
        let model = sample_model();

        let params_json = serde_json::to_string(&params).unwrap_or_default();
        let model_json = serde_json::to_string(&model).unwrap_or_default();

        html! {
            <PageFrame title="Editor de parámetros">
                <ParamEditorComponent params={params} model={model} />

                <div style="margin-top: 30px; font-size: 14px; color: #666;">
                    <h4>{ "Datos de origen" }</h4>
                    <p><strong>{ "Params: " }</strong>{ params_json }</p>
                    <p><strong>{ "Model: " }</strong>{ model_json }</p>
                </div>
            </PageFrame>
        }
    }
}

fn sample_params() -> Vec<Param> {
    vec![
        Param {
            id: 1,
            name: "Purpose".to_string(),
            param_type: ParamType::Text,
        },
        Param {
            id: 2,
            name: "Length".to_string(),
            param_type: ParamType::Text,
        },
        Param {
            id: 3,
            name: "Material".to_string(),
            param_type: ParamType::Text,
        },
    ]
}

fn sample_model() -> Model {
    Model {
        param_values: vec![
            ParamValue {
                param_id: 1,
                value: "casual".to_string(),
            },
            ParamValue {
                param_id: 2,
                value: "maxi".to_string(),
            },
        ],
        colors: vec![Color {
            id: 1,
            name: "Burgundy".to_string(),
            code: "#800020".to_string(),
        }],
    }
}
