#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod download;
pub mod input;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::init_logging(log::LevelFilter::Info);
    log::info!("Initializing Adventure Resume...");
    yew::Renderer::<app::App>::new().render();
    log::info!("🎯 Navigation: Arrow keys, spacebar to start, Ctrl+R to restart");
    log::info!("📱 Mobile: Swipe left/right to navigate between levels");
}
