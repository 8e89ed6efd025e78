#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod audio;
pub mod contact;
pub mod content;
pub mod motion;
#[cfg(feature = "ssr")]
pub mod relay;
pub mod reveal;
pub mod settings;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless, ignore it
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
