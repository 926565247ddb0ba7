use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Window};

use kazari_core::modal::modal_element_id;
use kazari_core::scroll::anchor_target_top;

use crate::dom;

const RIPPLE_LIFETIME_MS: u32 = 600;

const MODAL_SKELETON_HTML: &str = concat!(
    "<div class=\"modal-content\">",
    "<button class=\"modal-close\">&times;</button>",
    "<div class=\"modal-body\"></div>",
    "</div>",
);

/// Stateless click/hover/focus/keyboard handlers. Every listener is
/// collected here and cancelled when the bindings drop; none of them
/// holds state beyond the DOM itself.
pub(crate) struct InteractionBindings {
    _listeners: Vec<EventListener>,
    skeleton: Option<Element>,
}

impl InteractionBindings {
    pub(crate) fn install(window: &Window, document: &Document) -> Self {
        let mut listeners = Vec::new();
        bind_smooth_scroll(window, document, &mut listeners);
        let skeleton = inject_modal_skeleton(document, &mut listeners);
        bind_modals(document, &mut listeners);
        bind_ripples(document, &mut listeners);
        bind_card_flips(document, &mut listeners);
        bind_keyboard_activation(document, &mut listeners);
        bind_form_field_focus(document, &mut listeners);
        Self {
            _listeners: listeners,
            skeleton,
        }
    }
}

impl Drop for InteractionBindings {
    fn drop(&mut self) {
        if let Some(skeleton) = self.skeleton.take() {
            skeleton.remove();
        }
    }
}

fn bind_smooth_scroll(window: &Window, document: &Document, listeners: &mut Vec<EventListener>) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let anchor_in_click = anchor.clone();
        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor_in_click.get_attribute("href") else {
                return;
            };
            let id = href.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let top = anchor_target_top(f64::from(target.offset_top()));
            scroll_to_smooth(&window, top);
        }));
    }
}

fn scroll_to_smooth(window: &Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn inject_modal_skeleton(
    document: &Document,
    listeners: &mut Vec<EventListener>,
) -> Option<Element> {
    let body = document.body()?;
    let skeleton = dom::create_div(document, "project-modal")?;
    skeleton.set_inner_html(MODAL_SKELETON_HTML);
    body.append_child(&skeleton).ok()?;
    let skeleton: Element = skeleton.into();
    if let Ok(Some(close)) = skeleton.query_selector(".modal-close") {
        let skeleton_in_close = skeleton.clone();
        listeners.push(EventListener::new(&close, "click", move |_event| {
            hide_modal(&skeleton_in_close);
        }));
    }
    bind_backdrop_close(&skeleton, listeners);
    Some(skeleton)
}

fn bind_modals(document: &Document, listeners: &mut Vec<EventListener>) {
    for link in dom::query_all(document, ".project-card a") {
        let document = document.clone();
        let link_in_click = link.clone();
        listeners.push(EventListener::new(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = link_in_click.get_attribute("href") else {
                return;
            };
            let Some(id) = modal_element_id(&href) else {
                return;
            };
            if let Some(modal) = document.get_element_by_id(&id) {
                show_modal(&modal);
            }
        }));
    }
    for button in dom::query_all(document, ".close-modal") {
        let button_in_click = button.clone();
        listeners.push(EventListener::new(&button, "click", move |_event| {
            if let Ok(Some(modal)) = button_in_click.closest(".modal") {
                hide_modal(&modal);
            }
        }));
    }
    for modal in dom::query_all(document, ".modal") {
        bind_backdrop_close(&modal, listeners);
    }
}

/// A click that lands on the modal element itself (not its content)
/// counts as outside the dialog and dismisses it.
fn bind_backdrop_close(modal: &Element, listeners: &mut Vec<EventListener>) {
    let modal_in_click = modal.clone();
    listeners.push(EventListener::new(modal, "click", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(node) = target.dyn_ref::<web_sys::Node>() else {
            return;
        };
        if modal_in_click.is_same_node(Some(node)) {
            hide_modal(&modal_in_click);
        }
    }));
}

fn show_modal(modal: &Element) {
    if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
        let _ = modal.style().set_property("display", "block");
    }
}

fn hide_modal(modal: &Element) {
    if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
        let _ = modal.style().set_property("display", "none");
    }
}

fn bind_ripples(document: &Document, listeners: &mut Vec<EventListener>) {
    for card in dom::query_all(document, ".project-card") {
        let document = document.clone();
        let card_in_hover = card.clone();
        listeners.push(EventListener::new(&card, "mouseenter", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            spawn_ripple(&document, &card_in_hover, event, "ripple-effect", false);
        }));
    }
    for button in dom::query_all(document, ".btn-interactive") {
        let document = document.clone();
        let button_in_click = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            spawn_ripple(&document, &button_in_click, event, "btn-ripple", true);
        }));
    }
}

/// Transient decoration at the pointer position relative to its
/// container, removed after a fixed delay. Sized ripples cover the whole
/// control and center on the pointer.
fn spawn_ripple(
    document: &Document,
    container: &Element,
    event: &MouseEvent,
    class: &str,
    sized: bool,
) {
    let Some(ripple) = dom::create_div(document, class) else {
        return;
    };
    let rect = container.get_bounding_client_rect();
    let mut x = f64::from(event.client_x()) - rect.left();
    let mut y = f64::from(event.client_y()) - rect.top();
    let style = ripple.style();
    if sized {
        let size = rect.width().max(rect.height());
        x -= size / 2.0;
        y -= size / 2.0;
        let _ = style.set_property("width", &format!("{size}px"));
        let _ = style.set_property("height", &format!("{size}px"));
    }
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
    if container.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(RIPPLE_LIFETIME_MS, move || {
        ripple.remove();
    })
    .forget();
}

fn bind_card_flips(document: &Document, listeners: &mut Vec<EventListener>) {
    for card in dom::query_all(document, ".card-flip") {
        let card_in_click = card.clone();
        listeners.push(EventListener::new(&card, "click", move |_event| {
            let _ = card_in_click.class_list().toggle("flipped");
        }));
    }
}

/// Enter and Space act as click on the focused interactive element, so
/// keyboard users get the same bindings as pointer users.
fn bind_keyboard_activation(document: &Document, listeners: &mut Vec<EventListener>) {
    let document_in_key = document.clone();
    listeners.push(EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        if key != "Enter" && key != " " {
            return;
        }
        let Some(focused) = document_in_key.active_element() else {
            return;
        };
        if !focused.class_list().contains("interactive-element") {
            return;
        }
        event.prevent_default();
        if let Some(focused) = focused.dyn_ref::<HtmlElement>() {
            focused.click();
        }
    }));
}

fn bind_form_field_focus(document: &Document, listeners: &mut Vec<EventListener>) {
    for field in dom::query_all(document, ".form-field") {
        let Ok(Some(input)) = field.query_selector("input, textarea") else {
            continue;
        };
        let field_on_focus = field.clone();
        listeners.push(EventListener::new(&input, "focus", move |_event| {
            let _ = field_on_focus.class_list().add_1("focused");
        }));
        let field_on_blur = field.clone();
        listeners.push(EventListener::new(&input, "blur", move |_event| {
            let _ = field_on_blur.class_list().remove_1("focused");
        }));
    }
}
