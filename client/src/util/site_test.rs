use super::*;

#[test]
fn section_attribute_round_trips() {
    for section in [SiteSection::Landing, SiteSection::App] {
        assert_eq!(SiteSection::from_attribute(section.as_str()), section);
    }
}

#[test]
fn unknown_attribute_reads_as_landing() {
    assert_eq!(SiteSection::from_attribute(""), SiteSection::Landing);
    assert_eq!(SiteSection::from_attribute("admin"), SiteSection::Landing);
}

#[test]
fn normalize_host_strips_only_a_leading_www() {
    assert_eq!(normalize_host("www.reavsuite.com", "reavsuite.com", 3000), "reavsuite.com");
    assert_eq!(normalize_host("app.www.reavsuite.com", "reavsuite.com", 3000), "app.www.reavsuite.com");
}

#[test]
fn normalize_host_maps_localhost_to_base_domain() {
    assert_eq!(normalize_host("www.localhost:3000", "reavsuite.com", 3000), "reavsuite.com");
    assert_eq!(normalize_host("app.localhost:3000", "reavsuite.com", 3000), "app.reavsuite.com");
}

#[test]
fn app_host_matches_production_and_local_dev() {
    for host in ["app.reavsuite.com", "APP.ReavSuite.com", "www.app.reavsuite.com", "app.localhost:4000"] {
        assert!(is_app_host(host, "reavsuite.com", 4000), "{host}");
    }
}

#[test]
fn other_hosts_are_not_the_app_host() {
    for host in ["reavsuite.com", "www.reavsuite.com", "app.localhost:3000", "api.reavsuite.com"] {
        assert!(!is_app_host(host, "reavsuite.com", 4000), "{host}");
    }
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
#[test]
fn section_defaults_to_landing_outside_a_render() {
    assert_eq!(current_section(), SiteSection::Landing);
}
