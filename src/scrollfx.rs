use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use kazari_core::scroll::{back_to_top_visible, progress_percent};

/// Injected scroll progress bar plus the back-to-top control, both fed by
/// one cancellable window scroll listener.
pub(crate) struct ScrollEffects {
    progress_bar: Element,
    _listeners: Vec<EventListener>,
}

impl ScrollEffects {
    pub(crate) fn install(window: &Window, document: &Document) -> Option<Self> {
        let body = document.body()?;
        let progress_bar = crate::dom::create_div(document, "scroll-progress")?;
        let fill = crate::dom::create_div(document, "scroll-progress-fill")?;
        progress_bar.append_child(&fill).ok()?;
        body.append_child(&progress_bar).ok()?;

        let back_to_top = document
            .get_element_by_id("scroll-to-top")
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        let mut listeners = Vec::new();
        let window_in_scroll = window.clone();
        let body_in_scroll = body.clone();
        let button_in_scroll = back_to_top.clone();
        listeners.push(EventListener::new(window, "scroll", move |_event| {
            let scroll_top = window_in_scroll.scroll_y().unwrap_or(0.0);
            let doc_height = f64::from(body_in_scroll.scroll_height());
            let viewport = crate::dom::viewport_height(&window_in_scroll);
            let percent = progress_percent(scroll_top, doc_height, viewport);
            let _ = fill.style().set_property("width", &format!("{percent}%"));
            if let Some(button) = button_in_scroll.as_ref() {
                let display = if back_to_top_visible(scroll_top) {
                    "block"
                } else {
                    "none"
                };
                let _ = button.style().set_property("display", display);
            }
        }));

        if let Some(button) = back_to_top.as_ref() {
            let window_in_click = window.clone();
            listeners.push(EventListener::new(button, "click", move |_event| {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window_in_click.scroll_to_with_scroll_to_options(&options);
            }));
        }

        Some(Self {
            progress_bar: progress_bar.into(),
            _listeners: listeners,
        })
    }
}

impl Drop for ScrollEffects {
    fn drop(&mut self) {
        self.progress_bar.remove();
    }
}
