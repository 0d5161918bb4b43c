use crate::app::App;

mod app;
mod components;
mod page_frame;

fn main() {
    yew::Renderer::<App>::new().render();
}
