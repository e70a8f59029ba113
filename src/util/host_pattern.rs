//! Host input validation patterns.
//!
//! Monitor forms accept a bare IPv4/IPv6 address or DNS hostname; MQTT
//! monitors additionally allow the broker URI schemes the MQTT client
//! understands (`mqtt`, `mqtts`, `ws`, `wss`). The pattern text is also used
//! verbatim as an HTML `pattern` attribute, so it stays in the
//! JavaScript-compatible subset of regex syntax.

#[cfg(test)]
#[path = "host_pattern_test.rs"]
mod host_pattern_test;

use std::sync::LazyLock;

use regex::Regex;

/// Optional MQTT-family scheme prefix.
const MQTT_SCHEME: &str = r"((mqtt|ws)s?:\/\/)?";

/// Schemes stripped before the dotted-quad check.
const MQTT_SCHEMES: &[&str] = &["mqtt://", "mqtts://", "ws://", "wss://"];

const IPV4: &str = r"((([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5]))";

/// Full and compressed IPv6 forms, including embedded IPv4 tails.
const IPV6: &str = concat!(
    "(",
    r"(([0-9A-Fa-f]{1,4}:){7}([0-9A-Fa-f]{1,4}|:))|",
    r"(([0-9A-Fa-f]{1,4}:){6}(:[0-9A-Fa-f]{1,4}|((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3})|:))|",
    r"(([0-9A-Fa-f]{1,4}:){5}(((:[0-9A-Fa-f]{1,4}){1,2})|:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3})|:))|",
    r"(([0-9A-Fa-f]{1,4}:){4}(((:[0-9A-Fa-f]{1,4}){1,3})|((:[0-9A-Fa-f]{1,4})?:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|",
    r"(([0-9A-Fa-f]{1,4}:){3}(((:[0-9A-Fa-f]{1,4}){1,4})|((:[0-9A-Fa-f]{1,4}){0,2}:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|",
    r"(([0-9A-Fa-f]{1,4}:){2}(((:[0-9A-Fa-f]{1,4}){1,5})|((:[0-9A-Fa-f]{1,4}){0,3}:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|",
    r"(([0-9A-Fa-f]{1,4}:){1}(((:[0-9A-Fa-f]{1,4}){1,6})|((:[0-9A-Fa-f]{1,4}){0,4}:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|",
    r"(:(((:[0-9A-Fa-f]{1,4}){1,7})|((:[0-9A-Fa-f]{1,4}){0,5}:((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))",
    ")",
);

/// DNS labels of alphanumerics, `_` and inner `-`, dot-separated, optional trailing dot.
const HOSTNAME: &str = r"([a-zA-Z0-9])?(([a-zA-Z0-9_]|[a-zA-Z0-9_][a-zA-Z0-9\-_]*[a-zA-Z0-9_])\.)*([A-Za-z0-9_]|[A-Za-z0-9_][A-Za-z0-9\-_]*[A-Za-z0-9_])(\.)?";

static PLAIN: LazyLock<Result<HostPattern, regex::Error>> = LazyLock::new(|| HostPattern::new(false));
static MQTT: LazyLock<Result<HostPattern, regex::Error>> = LazyLock::new(|| HostPattern::new(true));

/// Regex pattern text matching an IPv4 address, an IPv6 address (with optional
/// `%zone` suffix) or a hostname.
///
/// With `mqtt`, the IPv4 and hostname forms may carry an MQTT-family scheme.
pub fn host_name_regex_pattern(mqtt: bool) -> String {
    let scheme = if mqtt { MQTT_SCHEME } else { "" };
    format!("((^{scheme}{IPV4}$)|(^{IPV6}(%.+)?$))|^{scheme}{HOSTNAME}$")
}

/// Compiled host pattern.
///
/// Build once per form and reuse; the IPv6 alternatives make compilation
/// comparatively expensive.
#[derive(Clone, Debug)]
pub struct HostPattern {
    mqtt: bool,
    pattern: String,
    full: Regex,
    ipv4: Regex,
}

impl HostPattern {
    /// Compile the pattern for plain hosts or, with `mqtt`, broker URIs.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error, which the fixed pattern text does not produce.
    pub fn new(mqtt: bool) -> Result<Self, regex::Error> {
        let pattern = host_name_regex_pattern(mqtt);
        let full = Regex::new(&pattern)?;
        let ipv4 = Regex::new(&format!("^{IPV4}$"))?;
        Ok(Self { mqtt, pattern, full, ipv4 })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn allows_mqtt_scheme(&self) -> bool {
        self.mqtt
    }

    /// Whether `input` is an acceptable host.
    ///
    /// Input made only of digits and dots is an IPv4 address or nothing: the
    /// hostname rules would otherwise accept out-of-range quads like `999.1.1.1`.
    /// This is stricter than [`host_name_regex_pattern`] alone, which also
    /// accepts all-numeric names such as `8080`, `1.2.3` and `1.2.3.4.`.
    pub fn is_match(&self, input: &str) -> bool {
        let host = if self.mqtt { strip_mqtt_scheme(input) } else { input };
        if is_dotted_numeric(host) {
            return self.ipv4.is_match(host);
        }
        self.full.is_match(input)
    }
}

/// Validate `input` against a shared compiled pattern.
pub fn is_valid_host(input: &str, mqtt: bool) -> bool {
    let pattern = if mqtt { &*MQTT } else { &*PLAIN };
    pattern.as_ref().is_ok_and(|p| p.is_match(input))
}

fn strip_mqtt_scheme(input: &str) -> &str {
    MQTT_SCHEMES
        .iter()
        .find_map(|scheme| input.strip_prefix(scheme))
        .unwrap_or(input)
}

fn is_dotted_numeric(host: &str) -> bool {
    host.bytes().any(|b| b.is_ascii_digit()) && host.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
