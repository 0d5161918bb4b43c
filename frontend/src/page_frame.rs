use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    pub title: String,
    pub children: Children,
}

/// Centered page column with a heading, used as the outermost layout of the
/// application.
pub struct PageFrame;

impl Component for PageFrame {
    type Message = ();
    type Properties = PageFrameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageFrame
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = "max-width: 600px;
             margin: 20px auto;
             padding: 20px;
             background: white;
             box-shadow: 0 0 8px #ccc;
             font-family: Arial, sans-serif;";

        html! {
            <div style={style}>
                <h2>{ props.title.clone() }</h2>
                { for props.children.iter() }
            </div>
        }
    }
}
