mod app;
mod dom;
mod forms;
mod interactions;
mod particles;
mod prefs;
mod resources;
mod reveal;
mod scrollfx;
mod theme_toggle;
mod typing;
mod visibility;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static APP: RefCell<Option<app::App>> = RefCell::new(None);
}

/// Single initialization step: constructs every page behavior once.
/// Re-entry is a no-op so a duplicate module load cannot double-bind.
#[wasm_bindgen(start)]
pub fn start() {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        *slot = app::App::install();
    });
}

/// Explicit teardown: cancels the particle frame loop and the typing
/// chain, disconnects observers, drops listeners, and removes every
/// injected node.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        slot.borrow_mut().take();
    });
}
