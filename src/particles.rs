use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use kazari_core::particles::ParticleField;

use crate::dom;

/// Decorative particle field behind the hero section: an injected
/// full-viewport canvas redrawn from the simulation once per frame.
/// `teardown` cancels the frame loop and removes the canvas; both are
/// required to avoid leaking a perpetual callback.
pub(crate) struct ParticleCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ParticleCanvas {
    pub(crate) fn install(window: &Window, document: &Document) -> Option<Rc<Self>> {
        document.query_selector(".hero").ok().flatten()?;
        let body = document.body()?;
        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_class_name("particle-canvas");
        let width = dom::viewport_width(window);
        let height = dom::viewport_height(window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        body.append_child(&canvas).ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        // Float-to-int casts saturate, so go through u64 to keep the
        // low millisecond bits as entropy.
        let seed = (js_sys::Date::now() as u64) as u32;
        let field = ParticleField::new(width as f32, height as f32, seed);

        let view = Rc::new(Self {
            canvas,
            ctx,
            field: RefCell::new(field),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners(window);
        view.schedule_frame();
        Some(view)
    }

    fn install_listeners(self: &Rc<Self>, window: &Window) {
        let view = Rc::clone(self);
        let window_in_resize = window.clone();
        let resize = EventListener::new(window, "resize", move |_event| {
            let width = dom::viewport_width(&window_in_resize);
            let height = dom::viewport_height(&window_in_resize);
            view.canvas.set_width(width as u32);
            view.canvas.set_height(height as u32);
            view.field.borrow_mut().resize(width as f32, height as f32);
        });
        self.listeners.borrow_mut().push(resize);
    }

    fn schedule_frame(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            view.frame.borrow_mut().take();
            view.draw_frame();
            view.schedule_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn draw_frame(&self) {
        let mut field = self.field.borrow_mut();
        field.frame();
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        for particle in field.particles() {
            ctx.begin_path();
            if ctx
                .arc(
                    f64::from(particle.x),
                    f64::from(particle.y),
                    f64::from(particle.radius),
                    0.0,
                    TAU,
                )
                .is_err()
            {
                continue;
            }
            ctx.set_fill_style_str(particle.color);
            ctx.set_global_alpha(f64::from(particle.alpha()));
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    pub(crate) fn teardown(&self) {
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        self.canvas.remove();
    }
}
