use std::rc::Rc;

use gloo::console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlImageElement, HtmlLinkElement, Window};

use crate::dom;
use crate::visibility::{VisibilityOptions, VisibilityTrigger};

const FONT_STYLESHEETS: [(&str, &str); 2] = [
    (
        "Inter",
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
    ),
    (
        "Space+Grotesk",
        "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap",
    ),
];

const SERVICE_WORKER_PATH: &str = "/sw.js";

/// Best-effort loading hints: lazy images behind a one-shot visibility
/// trigger, font stylesheet preloads, and same-origin service-worker
/// registration. Every failure path degrades silently.
pub(crate) struct ResourceHints {
    _lazy_trigger: Option<VisibilityTrigger>,
}

impl ResourceHints {
    pub(crate) fn install(window: &Window, document: &Document) -> Self {
        let lazy_trigger = install_lazy_images(document);
        preload_fonts(document);
        register_service_worker(window);
        Self {
            _lazy_trigger: lazy_trigger,
        }
    }
}

fn install_lazy_images(document: &Document) -> Option<VisibilityTrigger> {
    let mut pending: Vec<(HtmlImageElement, String)> = Vec::new();
    for element in dom::query_all(document, "img[data-src]") {
        let source = element.get_attribute("data-src").unwrap_or_default();
        if source.trim().is_empty() {
            log!("resources: empty data-src, skipping image");
            continue;
        }
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        pending.push((image, source));
    }
    if pending.is_empty() {
        return None;
    }
    let pending = Rc::new(pending);

    let pending_in_handler = Rc::clone(&pending);
    let handler = Rc::new(move |element: Element, _batch_index: usize| {
        for (image, source) in pending_in_handler.iter() {
            if !image.is_same_node(Some(element.as_ref())) {
                continue;
            }
            image.set_src(source);
            let classes = image.class_list();
            let _ = classes.remove_1("lazy");
            let _ = classes.add_1("loaded");
        }
    });
    let trigger = VisibilityTrigger::new(
        handler,
        VisibilityOptions {
            one_shot: true,
            ..VisibilityOptions::default()
        },
    )?;
    for (image, _) in pending.iter() {
        trigger.observe(image);
    }
    Some(trigger)
}

/// Injects a preload link per font stylesheet unless an equivalent link
/// already exists; `onload` promotes the preload to a live stylesheet.
fn preload_fonts(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    for (family, href) in FONT_STYLESHEETS {
        let probe = format!("link[href*=\"{family}\"]");
        if document.query_selector(&probe).ok().flatten().is_some() {
            continue;
        }
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let Ok(link) = link.dyn_into::<HtmlLinkElement>() else {
            continue;
        };
        link.set_rel("preload");
        let _ = link.set_attribute("as", "style");
        link.set_href(href);

        let promoted = link.clone();
        let on_load = Closure::once(move |_event: web_sys::Event| {
            promoted.set_rel("stylesheet");
        });
        link.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        let on_error = Closure::once(move |_event: web_sys::Event| {
            log!(format!("resources: font stylesheet failed: {family}"));
        });
        link.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        let _ = head.append_child(&link);
    }
}

fn register_service_worker(window: &Window) {
    let navigator = window.navigator();
    let has_container = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !has_container {
        return;
    }
    let promise = navigator.service_worker().register(SERVICE_WORKER_PATH);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log!("resources: service worker registered"),
            Err(err) => log!("resources: service worker registration failed", err),
        }
    });
}
