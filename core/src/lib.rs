pub mod counter;
pub mod form;
pub mod modal;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

pub use counter::CountUp;
pub use form::{is_valid_email, ContactSubmission, FieldError};
pub use modal::modal_element_id;
pub use particles::{spawn_count, Particle, ParticleField};
pub use reveal::{RevealKind, RevealKindError};
pub use theme::Theme;
pub use typing::{TypingPhase, TypingSequencer};
