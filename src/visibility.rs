use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub one_shot: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
            one_shot: false,
        }
    }
}

/// One viewport-intersection watcher with its own registered element set.
/// The handler runs per element whose visible fraction crosses the
/// threshold; one-shot triggers unregister an element after its first
/// firing. Dropping the trigger disconnects the observer.
pub(crate) struct VisibilityTrigger {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityTrigger {
    pub(crate) fn new(
        handler: Rc<dyn Fn(Element, usize)>,
        options: VisibilityOptions,
    ) -> Option<Self> {
        let one_shot = options.one_shot;
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut batch_index = 0usize;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if one_shot {
                        observer.unobserve(&target);
                    }
                    handler(target, batch_index);
                    batch_index += 1;
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityTrigger {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
