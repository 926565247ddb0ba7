use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::prefs::PreferenceStore;

const TOGGLE_SPIN_MS: u32 = 300;

/// Injected theme toggle button. Clicking flips the persisted preference,
/// swaps the glyph, and spins the control once.
pub(crate) struct ThemeToggle {
    button: HtmlElement,
    _click: EventListener,
}

impl ThemeToggle {
    pub(crate) fn install(document: &Document, prefs: Rc<PreferenceStore>) -> Option<Self> {
        let body = document.body()?;
        let button: HtmlElement = document.create_element("button").ok()?.dyn_into().ok()?;
        button.set_class_name("theme-toggle");
        let _ = button.set_attribute("aria-label", "Toggle theme");
        button.set_text_content(Some(prefs.read().toggle_glyph()));
        body.append_child(&button).ok()?;

        let document = document.clone();
        let button_in_click = button.clone();
        let click = EventListener::new(&button, "click", move |_event| {
            let next = prefs.read().toggled();
            prefs.write(&document, next);
            button_in_click.set_text_content(Some(next.toggle_glyph()));
            let _ = button_in_click
                .style()
                .set_property("transform", "rotate(360deg)");
            let reset = button_in_click.clone();
            Timeout::new(TOGGLE_SPIN_MS, move || {
                let _ = reset.style().set_property("transform", "rotate(0deg)");
            })
            .forget();
        });
        Some(Self {
            button,
            _click: click,
        })
    }
}

impl Drop for ThemeToggle {
    fn drop(&mut self) {
        self.button.remove();
    }
}
