use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_plausible_email("ada@reavsuite.com"));
    assert!(is_plausible_email("  first.last+tag@mail.example.org "));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "ada", "ada@", "@reavsuite.com", "ada@reavsuite", "ada@@x.com", "a da@x.com", "ada@x..com"] {
        assert!(!is_plausible_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn empty_input_asks_for_an_email() {
    assert_eq!(signup_feedback("   ").0, ToastKind::Error);
    assert_eq!(signup_feedback("").1, "Enter an email first.");
}

#[test]
fn valid_input_confirms() {
    assert_eq!(signup_feedback("ada@reavsuite.com").0, ToastKind::Success);
}

#[test]
fn social_row_has_three_labelled_networks() {
    let labels: Vec<_> = SocialNetwork::ALL.iter().map(|n| n.label()).collect();
    assert_eq!(labels, vec!["GitHub", "Twitter", "LinkedIn"]);
}
