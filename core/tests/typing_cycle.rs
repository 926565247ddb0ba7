use kazari_core::typing::{
    TypingPhase, TypingSequencer, ERASE_TICK_MS, HOLD_EMPTY_MS, HOLD_FULL_MS, TYPE_TICK_MS,
};

fn sequencer(entries: &[&str]) -> TypingSequencer {
    TypingSequencer::new(entries.iter().map(|entry| entry.to_string()).collect())
        .expect("non-empty playlist")
}

#[test]
fn empty_playlist_is_rejected() {
    assert!(TypingSequencer::new(Vec::new()).is_none());
}

#[test]
fn cycles_through_playlist_and_wraps() {
    let mut seq = sequencer(&["A", "BB"]);
    assert_eq!(seq.text(), "");

    assert_eq!(seq.step(), HOLD_FULL_MS);
    assert_eq!(seq.text(), "A");
    assert_eq!(seq.phase(), TypingPhase::HoldFull);

    assert_eq!(seq.step(), HOLD_EMPTY_MS);
    assert_eq!(seq.text(), "");
    assert_eq!(seq.phase(), TypingPhase::HoldEmpty);

    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.cursor(), 1);
    assert_eq!(seq.text(), "");

    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.text(), "B");
    assert_eq!(seq.step(), HOLD_FULL_MS);
    assert_eq!(seq.text(), "BB");

    assert_eq!(seq.step(), ERASE_TICK_MS);
    assert_eq!(seq.text(), "B");
    assert_eq!(seq.phase(), TypingPhase::Erasing);
    assert_eq!(seq.step(), HOLD_EMPTY_MS);
    assert_eq!(seq.text(), "");

    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.cursor(), 0, "cursor wraps after the last entry");
    assert_eq!(seq.phase(), TypingPhase::Typing);
}

#[test]
fn cursor_never_leaves_playlist_range() {
    let mut seq = sequencer(&["ab", "c", "def"]);
    for _ in 0..500 {
        seq.step();
        assert!(seq.cursor() < 3);
    }
}

#[test]
fn prefixes_cut_on_character_boundaries() {
    let mut seq = sequencer(&["héllo"]);
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.text(), "h");
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.text(), "hé");
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.text(), "hél");
}

#[test]
fn typing_paces_per_character() {
    let mut seq = sequencer(&["abcd"]);
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.step(), TYPE_TICK_MS);
    assert_eq!(seq.step(), HOLD_FULL_MS);
    assert_eq!(seq.step(), ERASE_TICK_MS);
    assert_eq!(seq.step(), ERASE_TICK_MS);
    assert_eq!(seq.step(), ERASE_TICK_MS);
    assert_eq!(seq.step(), HOLD_EMPTY_MS);
}
