use kazari_core::modal::modal_element_id;
use kazari_core::reveal::{
    parse_percent, skill_bar_delay_ms, stagger_delay_ms, RevealKind, RevealKindError,
};
use kazari_core::scroll::{anchor_target_top, back_to_top_visible, progress_percent};

#[test]
fn modal_id_resolves_from_fragment() {
    assert_eq!(
        modal_element_id("#3").as_deref(),
        Some("project-modal-3")
    );
    assert_eq!(
        modal_element_id("case-study").as_deref(),
        Some("project-modal-case-study")
    );
}

#[test]
fn modal_id_rejects_empty_or_spaced_fragments() {
    assert_eq!(modal_element_id(""), None);
    assert_eq!(modal_element_id("#"), None);
    assert_eq!(modal_element_id("#a b"), None);
}

#[test]
fn reveal_kinds_parse_from_wire_names() {
    assert_eq!(RevealKind::parse("reveal"), Ok(RevealKind::Reveal));
    assert_eq!(RevealKind::parse("animate"), Ok(RevealKind::Animate));
    assert_eq!(RevealKind::parse("slide-left"), Ok(RevealKind::SlideLeft));
    assert_eq!(RevealKind::parse("slide-right"), Ok(RevealKind::SlideRight));
    assert_eq!(RevealKind::parse("fade-scale"), Ok(RevealKind::FadeScale));
    assert_eq!(RevealKind::parse("rotate-in"), Ok(RevealKind::RotateIn));
}

#[test]
fn unknown_reveal_kind_is_a_typed_error() {
    let err = RevealKind::parse("wobble").unwrap_err();
    assert_eq!(
        err,
        RevealKindError::Unknown {
            name: "wobble".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown reveal kind 'wobble'");
}

#[test]
fn markers_split_by_family() {
    assert_eq!(RevealKind::Reveal.marker_class(), "revealed");
    assert!(!RevealKind::Reveal.staggered());
    for kind in [
        RevealKind::Animate,
        RevealKind::SlideLeft,
        RevealKind::SlideRight,
        RevealKind::FadeScale,
        RevealKind::RotateIn,
    ] {
        assert_eq!(kind.marker_class(), "animate");
        assert!(kind.staggered());
    }
}

#[test]
fn stagger_delays_scale_linearly() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(3), 300);
    assert_eq!(skill_bar_delay_ms(0), 0);
    assert_eq!(skill_bar_delay_ms(2), 400);
}

#[test]
fn percent_widths_validate_shape_and_range() {
    assert_eq!(parse_percent("85%"), Some(85));
    assert_eq!(parse_percent("0%"), Some(0));
    assert_eq!(parse_percent("100%"), Some(100));
    assert_eq!(parse_percent("101%"), None);
    assert_eq!(parse_percent("85"), None);
    assert_eq!(parse_percent("%"), None);
    assert_eq!(parse_percent("8a%"), None);
    assert_eq!(parse_percent("-5%"), None);
}

#[test]
fn progress_tracks_scrollable_range() {
    assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
}

#[test]
fn progress_clamps_and_guards_short_documents() {
    assert_eq!(progress_percent(1500.0, 2000.0, 1000.0), 100.0);
    assert_eq!(progress_percent(-10.0, 2000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(100.0, 500.0, 1000.0), 0.0);
}

#[test]
fn back_to_top_threshold_is_exclusive() {
    assert!(!back_to_top_visible(300.0));
    assert!(back_to_top_visible(300.5));
}

#[test]
fn anchors_land_below_the_fixed_header() {
    assert_eq!(anchor_target_top(500.0), 420.0);
    assert_eq!(anchor_target_top(80.0), 0.0);
    assert_eq!(anchor_target_top(10.0), 0.0);
}
