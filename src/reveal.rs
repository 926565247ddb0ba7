use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use kazari_core::counter::CountUp;
use kazari_core::reveal::{self, RevealKind, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

use crate::dom;
use crate::visibility::{VisibilityOptions, VisibilityTrigger};

/// Element categories and the behavior each category is bound to. The
/// kind names are resolved through `RevealKind::parse` once at startup;
/// nothing is discovered from free-form attributes mid-scroll.
const REVEAL_BINDINGS: &[(&str, &str)] = &[
    (".scroll-reveal", "reveal"),
    (".timeline-item", "reveal"),
    (".scroll-animate", "animate"),
    (".slide-in-left", "slide-left"),
    (".slide-in-right", "slide-right"),
    (".fade-in-scale", "fade-scale"),
    (".rotate-in", "rotate-in"),
];

const SCROLL_INDICATOR_HTML: &str = concat!(
    "<div class=\"scroll-arrow\"><i class=\"fas fa-chevron-down\"></i></div>",
    "<span>Scroll to explore</span>",
);

struct CounterSlot {
    element: Element,
    target: u32,
}

struct SkillBar {
    bar: HtmlElement,
    percent: u8,
}

struct SkillSection {
    section: Element,
    bars: Vec<SkillBar>,
}

/// Applies reveal markers and runs count-up and skill-bar animations when
/// their elements scroll into view.
pub(crate) struct RevealAnimator {
    _reveal_trigger: Option<VisibilityTrigger>,
    _skills_trigger: Option<VisibilityTrigger>,
    indicator: Option<Element>,
}

impl RevealAnimator {
    pub(crate) fn install(document: &Document) -> Self {
        Self {
            _reveal_trigger: install_reveal_trigger(document),
            _skills_trigger: install_skills_trigger(document),
            indicator: inject_scroll_indicator(document),
        }
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        if let Some(indicator) = self.indicator.take() {
            indicator.remove();
        }
    }
}

fn install_reveal_trigger(document: &Document) -> Option<VisibilityTrigger> {
    let mut bound: Vec<(Element, RevealKind)> = Vec::new();
    for (selector, kind_name) in REVEAL_BINDINGS {
        let kind = match RevealKind::parse(kind_name) {
            Ok(kind) => kind,
            Err(err) => {
                log!(format!("reveal: {err}"));
                continue;
            }
        };
        for element in dom::query_all(document, selector) {
            bound.push((element, kind));
        }
    }
    if bound.is_empty() {
        return None;
    }
    let counters = Rc::new(collect_counters(document));
    let bound = Rc::new(bound);

    let bound_in_handler = Rc::clone(&bound);
    let handler = Rc::new(move |element: Element, batch_index: usize| {
        let Some(kind) = lookup_kind(&bound_in_handler, &element) else {
            return;
        };
        apply_marker(&element, kind, batch_index);
        for slot in counters.iter() {
            if element.contains(Some(slot.element.as_ref())) {
                start_count_up(slot.element.clone(), slot.target);
            }
        }
    });
    let trigger = VisibilityTrigger::new(
        handler,
        VisibilityOptions {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
            one_shot: false,
        },
    )?;
    for (element, _) in bound.iter() {
        trigger.observe(element);
    }
    Some(trigger)
}

fn lookup_kind(bound: &[(Element, RevealKind)], element: &Element) -> Option<RevealKind> {
    bound
        .iter()
        .find(|(candidate, _)| candidate.is_same_node(Some(element.as_ref())))
        .map(|(_, kind)| *kind)
}

fn apply_marker(element: &Element, kind: RevealKind, batch_index: usize) {
    let marker = kind.marker_class();
    if kind.staggered() && batch_index > 0 {
        let element = element.clone();
        Timeout::new(reveal::stagger_delay_ms(batch_index), move || {
            let _ = element.class_list().add_1(marker);
        })
        .forget();
    } else {
        let _ = element.class_list().add_1(marker);
    }
}

fn collect_counters(document: &Document) -> Vec<CounterSlot> {
    let mut slots = Vec::new();
    for element in dom::query_all(document, ".counter[data-target]") {
        let raw = element.get_attribute("data-target").unwrap_or_default();
        match raw.trim().parse::<u32>() {
            Ok(target) => slots.push(CounterSlot { element, target }),
            Err(_) => log!(format!("reveal: invalid counter target '{raw}', skipping")),
        }
    }
    slots
}

struct CountUpRun {
    element: Element,
    state: RefCell<CountUp>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Self-terminating frame loop: the count-up completes in a bounded
/// number of frames, so the run keeps itself alive only until it snaps
/// to the target.
fn start_count_up(element: Element, target: u32) {
    let run = Rc::new(CountUpRun {
        element,
        state: RefCell::new(CountUp::new(target)),
        frame: RefCell::new(None),
    });
    schedule_count_frame(&run);
}

fn schedule_count_frame(run: &Rc<CountUpRun>) {
    let next = Rc::clone(run);
    let handle = request_animation_frame(move |_timestamp| {
        next.frame.borrow_mut().take();
        let value = next.state.borrow_mut().frame();
        next.element.set_text_content(Some(&value.to_string()));
        if !next.state.borrow().done() {
            schedule_count_frame(&next);
        }
    });
    *run.frame.borrow_mut() = Some(handle);
}

fn install_skills_trigger(document: &Document) -> Option<VisibilityTrigger> {
    let mut sections = Vec::new();
    for section in dom::query_all(document, ".skills-section") {
        let mut bars = Vec::new();
        for bar in dom::query_all_in(&section, ".skill-progress[data-width]") {
            let raw = bar.get_attribute("data-width").unwrap_or_default();
            let Some(percent) = reveal::parse_percent(raw.trim()) else {
                log!(format!("reveal: invalid skill width '{raw}', skipping"));
                continue;
            };
            let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
                continue;
            };
            bars.push(SkillBar { bar, percent });
        }
        sections.push(SkillSection { section, bars });
    }
    if sections.is_empty() {
        return None;
    }
    let sections = Rc::new(sections);

    let sections_in_handler = Rc::clone(&sections);
    let handler = Rc::new(move |element: Element, _batch_index: usize| {
        for section in sections_in_handler.iter() {
            if !section.section.is_same_node(Some(element.as_ref())) {
                continue;
            }
            for (idx, slot) in section.bars.iter().enumerate() {
                let bar = slot.bar.clone();
                let width = format!("{}%", slot.percent);
                Timeout::new(reveal::skill_bar_delay_ms(idx), move || {
                    let _ = bar.style().set_property("width", &width);
                })
                .forget();
            }
        }
    });
    let trigger = VisibilityTrigger::new(handler, VisibilityOptions::default())?;
    for section in sections.iter() {
        trigger.observe(&section.section);
    }
    Some(trigger)
}

fn inject_scroll_indicator(document: &Document) -> Option<Element> {
    let hero = document.query_selector(".hero").ok().flatten()?;
    let indicator = dom::create_div(document, "scroll-indicator animate-bounce")?;
    indicator.set_inner_html(SCROLL_INDICATOR_HTML);
    hero.append_child(&indicator).ok()?;
    Some(indicator.into())
}
