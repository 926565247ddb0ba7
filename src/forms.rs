use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use kazari_core::form::{ContactSubmission, SUCCESS_NOTICE};

use crate::dom;

/// Intercepts the contact form submit, validates the three scoped fields,
/// and withholds submission while surfacing one blocking notice per
/// failed rule, in field order.
pub(crate) struct ContactForm {
    _submit: EventListener,
}

impl ContactForm {
    pub(crate) fn install(document: &Document) -> Option<Self> {
        let form: HtmlFormElement = document
            .get_element_by_id("contact-form")?
            .dyn_into()
            .ok()?;
        let name = document.get_element_by_id("contact-name")?;
        let email = document.get_element_by_id("contact-email")?;
        let message = document.get_element_by_id("contact-message")?;

        let form_in_submit = form.clone();
        let submit = EventListener::new(&form, "submit", move |event| {
            event.prevent_default();
            let submission = ContactSubmission {
                name: field_value(&name),
                email: field_value(&email),
                message: field_value(&message),
            };
            let failures = submission.validate();
            if failures.is_empty() {
                notice(SUCCESS_NOTICE);
                let _ = form_in_submit.submit();
                return;
            }
            for failure in failures {
                notice(failure.notice());
            }
        });
        Some(Self { _submit: submit })
    }
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn notice(message: &str) {
    if let Some(window) = dom::window() {
        let _ = window.alert_with_message(message);
    }
}
