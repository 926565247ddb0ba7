use std::fmt;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const SKILL_BAR_STAGGER_MS: u32 = 200;

/// The closed set of reveal behaviors an element category can be bound
/// to. Binding tables name these by their wire names and resolve them once
/// at startup; an unknown name is a configuration error, not a runtime
/// fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Reveal,
    Animate,
    SlideLeft,
    SlideRight,
    FadeScale,
    RotateIn,
}

impl RevealKind {
    pub fn parse(value: &str) -> Result<Self, RevealKindError> {
        match value {
            "reveal" => Ok(RevealKind::Reveal),
            "animate" => Ok(RevealKind::Animate),
            "slide-left" => Ok(RevealKind::SlideLeft),
            "slide-right" => Ok(RevealKind::SlideRight),
            "fade-scale" => Ok(RevealKind::FadeScale),
            "rotate-in" => Ok(RevealKind::RotateIn),
            other => Err(RevealKindError::Unknown {
                name: other.to_string(),
            }),
        }
    }

    /// Terminal class applied when the element becomes visible. The
    /// animate-family variants share one marker; their variant class is
    /// already present on the element and selects the CSS animation.
    pub fn marker_class(self) -> &'static str {
        match self {
            RevealKind::Reveal => "revealed",
            _ => "animate",
        }
    }

    /// Only the animate family staggers within a visibility batch.
    pub fn staggered(self) -> bool {
        !matches!(self, RevealKind::Reveal)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealKindError {
    Unknown { name: String },
}

impl fmt::Display for RevealKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealKindError::Unknown { name } => {
                write!(f, "unknown reveal kind '{name}'")
            }
        }
    }
}

impl std::error::Error for RevealKindError {}

pub fn stagger_delay_ms(batch_index: usize) -> u32 {
    batch_index as u32 * REVEAL_STAGGER_MS
}

pub fn skill_bar_delay_ms(bar_index: usize) -> u32 {
    bar_index as u32 * SKILL_BAR_STAGGER_MS
}

/// Validates a `data-width` payload of the `NN%` shape, 0 to 100.
pub fn parse_percent(value: &str) -> Option<u8> {
    let digits = value.strip_suffix('%')?;
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let percent: u32 = digits.parse().ok()?;
    if percent > 100 {
        return None;
    }
    Some(percent as u8)
}
