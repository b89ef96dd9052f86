//! Binary entry point: installs the panic hook and mounts the app.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let mount_point = document()
        .get_element_by_id("app")
        .expect("index.html must provide a #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(mount_point, app::App).forget();
}
