#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn os_prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!os_prefers_dark());
}

#[test]
fn document_root_apply_is_noop_but_callable() {
    let mut root = DocumentRoot;
    root.apply_mode(EffectiveMode::Light);
    root.apply_mode(EffectiveMode::Dark);
}
