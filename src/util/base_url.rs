//! API base URL resolution.
//!
//! In development the static assets and the API server listen on different
//! ports (or, in a dev container, different preview hostnames), so requests
//! need an absolute origin. Production builds are served by the API server
//! itself and use same-origin relative URLs.

#[cfg(test)]
#[path = "base_url_test.rs"]
mod base_url_test;

use crate::config::{PageLocation, RuntimeEnv};

/// Port the API server listens on during development.
pub const DEV_API_PORT: u16 = 3001;

const DEV_CONTAINER_FRONTEND_SUFFIX: &str = "-3000.preview.app.github.dev";
const DEV_CONTAINER_API_SUFFIX: &str = "-3001.preview.app.github.dev";

/// Base URL to prefix API and resource paths with.
///
/// Returns an empty string when same-origin URLs should be used.
pub fn res_base_url(env: &RuntimeEnv, location: &PageLocation) -> String {
    if env.mode.is_development() && env.dev_container {
        format!("{}//{}", location.protocol, dev_container_server_hostname(&location.hostname))
    } else if env.mode.is_development() || env.dev_override {
        format!("{}//{}:{DEV_API_PORT}", location.protocol, location.hostname)
    } else {
        String::new()
    }
}

/// Hostname of the API server's dev-container preview.
///
/// Preview hostnames encode the forwarded port (`<name>-3000.preview...`);
/// hostnames without that suffix come back unchanged.
pub fn dev_container_server_hostname(hostname: &str) -> String {
    hostname.replacen(DEV_CONTAINER_FRONTEND_SUFFIX, DEV_CONTAINER_API_SUFFIX, 1)
}

/// [`res_base_url`] for the running page. Empty outside the browser.
pub fn current_res_base_url() -> String {
    PageLocation::current()
        .map(|location| res_base_url(&RuntimeEnv::detect(), &location))
        .unwrap_or_default()
}
