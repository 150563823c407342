use super::*;

fn loaded(path: &str) -> SwitchEvent {
    SwitchEvent::Loaded { path: path.to_owned() }
}

fn navigated(path: &str) -> SwitchEvent {
    SwitchEvent::Navigated { path: path.to_owned() }
}

// =============================================================
// Location events
// =============================================================

#[test]
fn load_on_path_renders_on() {
    let t = reduce(None, &loaded("/on"));
    assert_eq!(t.next, Some(SwitchState::On));
    assert_eq!(t.effects, vec![Effect::Render(SwitchState::On)]);
    assert_eq!(t.request(), None);
}

#[test]
fn load_unknown_path_keeps_unknown_state() {
    let t = reduce(None, &loaded("/"));
    assert_eq!(t.next, None);
    assert!(t.effects.is_empty());
}

#[test]
fn navigation_to_unknown_path_keeps_previous_state() {
    for current in [Some(SwitchState::On), Some(SwitchState::Off), None] {
        for path in ["/", "/settings", "/on/", ""] {
            let t = reduce(current, &navigated(path));
            assert_eq!(t.next, current, "path {path:?}");
            assert!(t.effects.is_empty());
        }
    }
}

#[test]
fn back_navigation_restores_prior_state_without_request() {
    let t = reduce(Some(SwitchState::On), &navigated("/off"));
    assert_eq!(t.next, Some(SwitchState::Off));
    assert_eq!(t.effects, vec![Effect::Render(SwitchState::Off)]);
    assert_eq!(t.request(), None);
}

// =============================================================
// User actions
// =============================================================

#[test]
fn checkbox_checked_pushes_on_and_requests_on() {
    let t = reduce(Some(SwitchState::Off), &SwitchEvent::CheckboxChanged { checked: true });
    assert_eq!(t.next, Some(SwitchState::On));
    assert_eq!(t.effects, vec![Effect::PushPath("/on"), Effect::Request(SwitchState::On)]);
    assert_eq!(t.request(), Some(SwitchState::On));
}

#[test]
fn checkbox_unchecked_pushes_off_and_requests_off() {
    let t = reduce(Some(SwitchState::On), &SwitchEvent::CheckboxChanged { checked: false });
    assert_eq!(t.next, Some(SwitchState::Off));
    assert_eq!(t.effects, vec![Effect::PushPath("/off"), Effect::Request(SwitchState::Off)]);
}

#[test]
fn button_click_requests_even_when_state_is_unchanged() {
    let t = reduce(Some(SwitchState::On), &SwitchEvent::ButtonClicked(SwitchState::On));
    assert_eq!(t.next, Some(SwitchState::On));
    assert_eq!(t.request(), Some(SwitchState::On));
}

#[test]
fn button_click_from_unknown_state() {
    let t = reduce(None, &SwitchEvent::ButtonClicked(SwitchState::Off));
    assert_eq!(t.next, Some(SwitchState::Off));
    assert_eq!(t.effects[0], Effect::PushPath("/off"));
}
