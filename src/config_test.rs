use super::*;

// =============================================================
// BuildMode
// =============================================================

#[test]
fn build_mode_parses_development_only() {
    assert_eq!(BuildMode::parse(Some("development")), BuildMode::Development);
    assert_eq!(BuildMode::parse(Some(" development ")), BuildMode::Production);
    assert_eq!(BuildMode::parse(Some("development\n")), BuildMode::Production);
    assert_eq!(BuildMode::parse(Some("production")), BuildMode::Production);
    assert_eq!(BuildMode::parse(Some("Development")), BuildMode::Production);
    assert_eq!(BuildMode::parse(None), BuildMode::Production);
}

#[test]
fn build_mode_default_is_production() {
    assert_eq!(BuildMode::default(), BuildMode::Production);
    assert!(!BuildMode::default().is_development());
}

// =============================================================
// RuntimeEnv
// =============================================================

#[test]
fn from_vars_recognises_dev_container_flag() {
    let env = RuntimeEnv::from_vars(Some("development"), Some("1"), None);
    assert_eq!(env.mode, BuildMode::Development);
    assert!(env.dev_container);
    assert!(!env.dev_override);
}

#[test]
fn from_vars_ignores_other_dev_container_values() {
    assert!(!RuntimeEnv::from_vars(None, Some("0"), None).dev_container);
    assert!(!RuntimeEnv::from_vars(None, Some("true"), None).dev_container);
    assert!(!RuntimeEnv::from_vars(None, None, None).dev_container);
}

#[test]
fn from_vars_requires_exact_dev_override_value() {
    assert!(RuntimeEnv::from_vars(None, None, Some("dev")).dev_override);
    assert!(!RuntimeEnv::from_vars(None, None, Some("1")).dev_override);
    assert!(!RuntimeEnv::from_vars(None, None, Some("")).dev_override);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_has_no_browser_override_natively() {
    assert!(!RuntimeEnv::detect().dev_override);
}

// =============================================================
// PageLocation
// =============================================================

#[test]
fn page_location_new_keeps_parts() {
    let loc = PageLocation::new("https:", "status.example.com");
    assert_eq!(loc.protocol, "https:");
    assert_eq!(loc.hostname, "status.example.com");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_location_current_is_none_natively() {
    assert!(PageLocation::current().is_none());
}
