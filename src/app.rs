use std::rc::Rc;

use crate::dom;
use crate::forms::ContactForm;
use crate::interactions::InteractionBindings;
use crate::particles::ParticleCanvas;
use crate::prefs::PreferenceStore;
use crate::resources::ResourceHints;
use crate::reveal::RevealAnimator;
use crate::scrollfx::ScrollEffects;
use crate::theme_toggle::ThemeToggle;
use crate::typing::TypingDriver;

/// Composition root: every component is constructed once here and owned
/// explicitly, so dropping the app cancels every listener, observer,
/// timer and frame loop the page behaviors hold.
pub(crate) struct App {
    _prefs: Rc<PreferenceStore>,
    _theme_toggle: Option<ThemeToggle>,
    _reveals: RevealAnimator,
    typing: Option<Rc<TypingDriver>>,
    particles: Option<Rc<ParticleCanvas>>,
    _interactions: InteractionBindings,
    _forms: Option<ContactForm>,
    _scrollfx: Option<ScrollEffects>,
    _resources: ResourceHints,
}

impl App {
    pub(crate) fn install() -> Option<Self> {
        let window = dom::window()?;
        let document = window.document()?;
        dom::inject_style(&document, dom::INJECTED_CSS);

        let prefs = Rc::new(PreferenceStore::new());
        // Apply the persisted theme before any component paints.
        prefs.write(&document, prefs.read());

        Some(Self {
            _theme_toggle: ThemeToggle::install(&document, Rc::clone(&prefs)),
            _prefs: prefs,
            _reveals: RevealAnimator::install(&document),
            typing: TypingDriver::install(&document),
            particles: ParticleCanvas::install(&window, &document),
            _interactions: InteractionBindings::install(&window, &document),
            _forms: ContactForm::install(&document),
            _scrollfx: ScrollEffects::install(&window, &document),
            _resources: ResourceHints::install(&window, &document),
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The typing chain and the frame loop keep themselves alive
        // through their pending callbacks; they stop only when told to.
        if let Some(typing) = self.typing.take() {
            typing.stop();
        }
        if let Some(particles) = self.particles.take() {
            particles.teardown();
        }
    }
}
