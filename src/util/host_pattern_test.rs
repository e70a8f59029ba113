use super::*;

fn plain() -> HostPattern {
    HostPattern::new(false).expect("plain host pattern should compile")
}

fn mqtt() -> HostPattern {
    HostPattern::new(true).expect("mqtt host pattern should compile")
}

// =============================================================
// Pattern text
// =============================================================

#[test]
fn plain_pattern_has_no_scheme_prefix() {
    let pattern = host_name_regex_pattern(false);
    assert!(pattern.starts_with(r"((^((([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}"));
    assert!(pattern.ends_with(r"([A-Za-z0-9_]|[A-Za-z0-9_][A-Za-z0-9\-_]*[A-Za-z0-9_])(\.)?$"));
    assert!(!pattern.contains("mqtt"));
}

#[test]
fn mqtt_pattern_prefixes_ipv4_and_hostname_branches() {
    let pattern = host_name_regex_pattern(true);
    assert!(pattern.starts_with(r"((^((mqtt|ws)s?:\/\/)?((([0-9]"));
    assert_eq!(pattern.matches(MQTT_SCHEME).count(), 2);
    assert!(pattern.contains(r"|^((mqtt|ws)s?:\/\/)?([a-zA-Z0-9])?"));
    assert!(pattern.contains(r"(%.+)?$))|"));
}

#[test]
fn compiled_pattern_exposes_text_and_mode() {
    let p = mqtt();
    assert_eq!(p.as_str(), host_name_regex_pattern(true));
    assert!(p.allows_mqtt_scheme());
    assert!(!plain().allows_mqtt_scheme());
}

// =============================================================
// Plain hosts
// =============================================================

#[test]
fn plain_accepts_ipv4_and_hostnames() {
    let p = plain();
    for host in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "example.com", "localhost", "my_host-1.lan", "example.com."] {
        assert!(p.is_match(host), "{host} should match");
    }
}

#[test]
fn plain_rejects_out_of_range_quads() {
    let p = plain();
    for host in ["999.1.1.1", "256.1.1.1", "1.2.3", "8080", "1.2.3.4."] {
        assert!(!p.is_match(host), "{host} should not match");
    }
}

#[test]
fn raw_pattern_accepts_numeric_names_that_is_match_refuses() {
    let raw = Regex::new(&host_name_regex_pattern(false)).expect("pattern should compile");
    let p = plain();
    for host in ["999.1.1.1", "8080", "1.2.3", "1.2.3.4."] {
        assert!(raw.is_match(host), "{host} should match the raw pattern");
        assert!(!p.is_match(host), "{host} should be refused by is_match");
    }
}

#[test]
fn plain_accepts_ipv6_forms() {
    let p = plain();
    for host in [
        "::1",
        "fe80::1%eth0",
        "2001:db8:85a3:0:0:8a2e:370:7334",
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
        "::ffff:192.168.1.1",
    ] {
        assert!(p.is_match(host), "{host} should match");
    }
}

#[test]
fn plain_rejects_malformed_hosts() {
    let p = plain();
    for host in ["", "-bad.com", "bad-.com", "a..b", "exa mple.com", "1::2::3", "[::1]", "mqtt://broker.local"] {
        assert!(!p.is_match(host), "{host} should not match");
    }
}

// =============================================================
// MQTT hosts
// =============================================================

#[test]
fn mqtt_accepts_scheme_and_bare_hosts() {
    let p = mqtt();
    for host in ["mqtt://broker.local", "broker.local", "mqtts://broker.local", "ws://broker", "wss://10.0.0.1", "::1"] {
        assert!(p.is_match(host), "{host} should match");
    }
}

#[test]
fn mqtt_rejects_other_schemes_and_bad_quads() {
    let p = mqtt();
    for host in ["http://broker.local", "mqtt://999.1.1.1", "mqtt://::1"] {
        assert!(!p.is_match(host), "{host} should not match");
    }
}

// =============================================================
// Shared validator
// =============================================================

#[test]
fn is_valid_host_uses_matching_pattern() {
    assert!(is_valid_host("192.168.1.1", false));
    assert!(!is_valid_host("999.1.1.1", false));
    assert!(is_valid_host("mqtt://broker.local", true));
    assert!(!is_valid_host("mqtt://broker.local", false));
}
