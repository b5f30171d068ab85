//! End-to-end behavior of hidden selection mirrors.
use icy_menu::core::accessibility;
use icy_menu::core::collection::Tree;
use icy_menu::core::native::Element;
use icy_menu::{
    HiddenSelect, Key, MirrorMode, NativeChange, Selection, SelectionMode, SelectionState,
    Settings, Shell,
};

fn items(count: usize) -> Tree {
    Tree::flat((1..=count).map(|n| (Key::from(n), n.to_string()))).expect("valid tree")
}

fn assert_marked(view: &Element) {
    for element in [view].into_iter().chain(view.find_all("select")) {
        let marker = element
            .get(accessibility::IGNORE_ATTRIBUTE)
            .expect("accessibility marker");

        assert!(accessibility::is_truthy(marker));
    }
}

#[test]
fn small_collections_are_mirrored_in_full() {
    let tree = items(5);
    let state = SelectionState::new(SelectionMode::Single);
    let mirror: HiddenSelect<'_, _, Selection> = HiddenSelect::new(&tree, &state);

    assert_eq!(mirror.mode(), MirrorMode::Full);
    assert_eq!(mirror.view().find_all("option").count(), 6);
}

#[test]
fn large_unnamed_collections_are_mirrored_for_accessibility_only() {
    let tree = items(400);
    let state = SelectionState::new(SelectionMode::Single);
    let mirror: HiddenSelect<'_, _, Selection> = HiddenSelect::new(&tree, &state);

    assert_eq!(mirror.mode(), MirrorMode::AccessibilityOnly);
    assert_eq!(mirror.view().find_all("option").count(), 0);
}

#[test]
fn a_name_forces_the_full_mirror() {
    let tree = items(400);
    let state = SelectionState::new(SelectionMode::Single);
    let mirror: HiddenSelect<'_, _, Selection> = HiddenSelect::new(&tree, &state).name("select");

    assert_eq!(mirror.mode(), MirrorMode::Full);
    assert_eq!(mirror.view().find_all("option").count(), 401);
}

#[test]
fn the_threshold_comes_from_settings() {
    let tree = items(50);
    let state = SelectionState::new(SelectionMode::Single);
    let settings = Settings {
        mirror_threshold: 10,
        ..Settings::default()
    };
    let mirror: HiddenSelect<'_, _, Selection> =
        HiddenSelect::new(&tree, &state).settings(&settings);

    assert_eq!(mirror.mode(), MirrorMode::AccessibilityOnly);
}

#[test]
fn every_mirror_carries_the_accessibility_marker() {
    let small = items(5);
    let large = items(400);
    let state = SelectionState::new(SelectionMode::Single);

    let small: HiddenSelect<'_, _, Selection> = HiddenSelect::new(&small, &state);
    let large: HiddenSelect<'_, _, Selection> = HiddenSelect::new(&large, &state);

    assert_eq!(small.mode(), MirrorMode::Full);
    assert_eq!(large.mode(), MirrorMode::AccessibilityOnly);

    assert_marked(&small.view());
    assert_marked(&large.view());
    assert_eq!(accessibility::IGNORE_ATTRIBUTE, "data-rsp-a11y-ignore");
}

#[test]
fn autofill_selects_the_translated_key_once() {
    let tree = items(5);
    let state = SelectionState::new(SelectionMode::Single);
    let mirror = HiddenSelect::new(&tree, &state)
        .label("select")
        .on_selection_change(|selection| selection);

    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);

    assert!(mirror.on_native_change(NativeChange::Value("5".to_owned()), &mut shell));

    assert_eq!(messages, vec![Selection::Single(Key::from("5"))]);
}
