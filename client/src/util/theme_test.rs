use super::*;

#[test]
fn listener_waits_for_first_resolution() {
    assert!(!follows_os_signal(false, ThemePreference::System));
}

#[test]
fn listener_attached_only_for_system() {
    assert!(follows_os_signal(true, ThemePreference::System));
    assert!(!follows_os_signal(true, ThemePreference::Dark));
    assert!(!follows_os_signal(true, ThemePreference::Light));
}
