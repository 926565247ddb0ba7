pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const FIXED_HEADER_OFFSET_PX: f64 = 80.0;

/// Page scroll progress as a 0-100 percentage. A document shorter than
/// the viewport has no scrollable range and reads as zero.
pub fn progress_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let range = doc_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Scroll destination that leaves the target just below the fixed header.
pub fn anchor_target_top(offset_top: f64) -> f64 {
    (offset_top - FIXED_HEADER_OFFSET_PX).max(0.0)
}
