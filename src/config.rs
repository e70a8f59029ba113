//! Runtime configuration for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frontend build is told its mode and whether it runs inside a dev
//! container through build-time variables; a developer can also force the
//! dev API port from `localStorage`. These are resolved once into plain values
//! so URL helpers stay pure and testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key a developer sets to `"dev"` to reach the dev API port.
#[cfg(feature = "hydrate")]
const DEV_OVERRIDE_KEY: &str = "dev";

/// Frontend build flavour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// Only the exact string `development` selects development mode.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

/// Resolved environment flags consulted by the base URL helper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub mode: BuildMode,
    /// Running inside a dev container with pattern-based preview hostnames.
    pub dev_container: bool,
    /// Developer forced the dev API port from a production-mode build.
    pub dev_override: bool,
}

impl RuntimeEnv {
    /// Build from raw variable values.
    ///
    /// - `mode`: `development` or anything else
    /// - `devcontainer`: active only when exactly `1`
    /// - `dev_override`: active only when exactly `dev`
    pub fn from_vars(mode: Option<&str>, devcontainer: Option<&str>, dev_override: Option<&str>) -> Self {
        Self {
            mode: BuildMode::parse(mode),
            dev_container: devcontainer == Some("1"),
            dev_override: dev_override == Some("dev"),
        }
    }

    /// Read build-time `APP_MODE` / `DEVCONTAINER` and the browser override flag.
    ///
    /// Without `APP_MODE`, debug builds count as development.
    pub fn detect() -> Self {
        let default_mode = if cfg!(debug_assertions) { "development" } else { "production" };
        let mode = option_env!("APP_MODE").unwrap_or(default_mode);
        let dev_override = read_dev_override();
        Self::from_vars(Some(mode), option_env!("DEVCONTAINER"), dev_override.as_deref())
    }
}

fn read_dev_override() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(DEV_OVERRIDE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The parts of `window.location` the client needs to build API URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `http:`.
    pub protocol: String,
    pub hostname: String,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self { protocol: protocol.into(), hostname: hostname.into() }
    }

    /// Current page location. Returns `None` outside the browser.
    pub fn current() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let location = web_sys::window()?.location();
            let protocol = location.protocol().ok()?;
            let hostname = location.hostname().ok()?;
            Some(Self { protocol, hostname })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
