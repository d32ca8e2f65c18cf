use super::*;

#[test]
fn rewritten_root_shows_slash() {
    assert_eq!(visible_path("/app", true), "/");
    assert_eq!(visible_path("/app/", true), "/");
}

#[test]
fn rewritten_deep_link_drops_the_prefix() {
    assert_eq!(visible_path("/app/dashboard", true), "/dashboard");
    assert_eq!(visible_path("/app/app/x", true), "/app/x");
}

#[test]
fn browser_path_is_shown_as_typed() {
    assert_eq!(visible_path("/dashboard", false), "/dashboard");
    assert_eq!(visible_path("/app/x", false), "/app/x");
    assert_eq!(visible_path("/apple", false), "/apple");
}

#[test]
fn prefix_must_end_at_a_segment_boundary() {
    assert_eq!(visible_path("/apple", true), "/apple");
}
