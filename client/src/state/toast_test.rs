use super::*;

#[test]
fn toast_state_starts_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_places_newest_first() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Success, "two");
    assert_ne!(first, second);
    assert_eq!(state.toasts[0].message, "two");
    assert_eq!(state.toasts[1].message, "one");
}

#[test]
fn push_caps_visible_toasts() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.toasts[0].message, "t4");
    assert_eq!(state.toasts[MAX_VISIBLE_TOASTS - 1].message, "t2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Info, "keep");
    let drop_id = state.push(ToastKind::Error, "drop");

    assert!(state.dismiss(drop_id));
    assert!(!state.dismiss(drop_id));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn kinds_map_to_distinct_modifiers() {
    assert_ne!(ToastKind::Success.modifier(), ToastKind::Error.modifier());
    assert_ne!(ToastKind::Error.modifier(), ToastKind::Info.modifier());
}
