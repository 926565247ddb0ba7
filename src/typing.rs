use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use kazari_core::typing::{TypingSequencer, TYPE_TICK_MS};

/// Fixed playlist typed into the hero text node, forever.
const TYPING_PLAYLIST: [&str; 4] = [
    "AI Specialist",
    "Researcher",
    "Educational Technology Innovator",
    "Python Developer",
];

/// Drives the typing state machine with a self-rescheduling timeout
/// chain. The pending timeout is the only live handle into the chain:
/// taking it cancels the cycle at whatever phase it is in.
pub(crate) struct TypingDriver {
    element: Element,
    sequencer: RefCell<TypingSequencer>,
    pending: RefCell<Option<Timeout>>,
}

impl TypingDriver {
    /// Hard precondition: without the target node the sequencer is never
    /// constructed, let alone started.
    pub(crate) fn install(document: &Document) -> Option<Rc<Self>> {
        let element = document.query_selector(".typing-text").ok().flatten()?;
        let playlist = TYPING_PLAYLIST.iter().map(|entry| entry.to_string()).collect();
        let sequencer = TypingSequencer::new(playlist)?;
        let driver = Rc::new(Self {
            element,
            sequencer: RefCell::new(sequencer),
            pending: RefCell::new(None),
        });
        driver.schedule(TYPE_TICK_MS);
        Some(driver)
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32) {
        let driver = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            driver.pending.borrow_mut().take();
            let delay = {
                let mut sequencer = driver.sequencer.borrow_mut();
                let delay = sequencer.step();
                driver.element.set_text_content(Some(sequencer.text()));
                delay
            };
            driver.schedule(delay);
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Cancels the pending tick; the machine halts mid-phase and never
    /// reschedules.
    pub(crate) fn stop(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
