//! Parameter editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ParamEditorProps`, `ParamEditorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Seed the editor state from the `params` and `model` props on creation;
//!   the state lives until the component is unmounted and is never persisted.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ParamEditorProps;
pub use state::ParamEditorComponent;

impl Component for ParamEditorComponent {
    type Message = Msg;
    type Properties = ParamEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ParamEditorComponent::new(props.params.clone(), &props.model)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
