//! Environment-derived configuration loading.
//!
//! The flag set matches what the original harness consumed: `VERBOSE` and
//! `QUERY_LOG` enable on any non-empty value, `DOCKER_SETUP=0` disables
//! container orchestration entirely.

use crate::domain::config::HarnessConfig;

/// Build a [`HarnessConfig`] from the process environment.
#[must_use]
pub fn from_env() -> HarnessConfig {
    from_lookup(|name| std::env::var(name).ok())
}

/// Build a [`HarnessConfig`] from an arbitrary variable lookup.
///
/// Split out from [`from_env`] so tests can drive flag parsing without
/// mutating the process environment.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HarnessConfig {
    let flag = |name: &str| lookup(name).is_some_and(|value| !value.is_empty());
    HarnessConfig::default()
        .with_verbose(flag("VERBOSE"))
        .with_query_log(flag("QUERY_LOG"))
        .with_skip_orchestration(lookup("DOCKER_SETUP").is_some_and(|value| value == "0"))
}
