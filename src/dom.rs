use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) const INJECTED_CSS: &str = include_str!("injected.css");

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    let Ok(list) = document.query_selector_all(selector) else {
        return found;
    };
    for idx in 0..list.length() {
        let Some(node) = list.item(idx) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            found.push(element);
        }
    }
    found
}

pub(crate) fn query_all_in(element: &Element, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    let Ok(list) = element.query_selector_all(selector) else {
        return found;
    };
    for idx in 0..list.length() {
        let Some(node) = list.item(idx) else {
            continue;
        };
        if let Ok(child) = node.dyn_into::<Element>() {
            found.push(child);
        }
    }
    found
}

pub(crate) fn create_div(document: &Document, class: &str) -> Option<HtmlElement> {
    let element = document.create_element("div").ok()?;
    element.set_class_name(class);
    element.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn inject_style(document: &Document, css: &str) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}
