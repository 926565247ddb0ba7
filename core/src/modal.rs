pub const MODAL_ID_PREFIX: &str = "project-modal-";

/// Maps a trigger link's target fragment (`#3` or a bare `3`) to the
/// element id of the modal it references. Empty or whitespace-bearing
/// fragments reference nothing.
pub fn modal_element_id(fragment: &str) -> Option<String> {
    let key = fragment.strip_prefix('#').unwrap_or(fragment);
    if key.is_empty() || key.chars().any(|ch| ch.is_whitespace()) {
        return None;
    }
    Some(format!("{MODAL_ID_PREFIX}{key}"))
}
