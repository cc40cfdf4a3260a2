mod api;
mod components;
mod coords;
mod maps;
mod pages;
mod provider;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::game::Game {}
    }
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}
