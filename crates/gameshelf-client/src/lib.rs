pub mod app;
mod diag;
pub mod filters;
pub mod loader;
pub mod render;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use app::{App, SharedApp};

/// WASM entry point: resolve the page mounts and start the one-shot catalog
/// load. Everything after the fetch resolves synchronously.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(app) = App::mount(document) else {
        diag::console_warn!("missing #game-list or #filter-bar mount, not booting");
        return;
    };
    let app: SharedApp = Rc::new(RefCell::new(app));
    spawn_local(loader::boot(app));
}
