//! Todo Frontend Entry Point

mod api;
mod app;
mod bootstrap;
mod components;
mod context;
mod models;

fn main() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(bootstrap::run());
}
