//! `from_env` against the real process environment.
//!
//! Serialized: these tests mutate env vars shared across the test binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use repco_testdb::infra::config::from_env;
use serial_test::serial;

#[allow(unsafe_code)]
fn set(name: &str, value: &str) {
    unsafe {
        std::env::set_var(name, value);
    }
}

#[allow(unsafe_code)]
fn clear(name: &str) {
    unsafe {
        std::env::remove_var(name);
    }
}

fn clear_all() {
    for name in ["VERBOSE", "QUERY_LOG", "DOCKER_SETUP"] {
        clear(name);
    }
}

#[test]
#[serial]
fn from_env_defaults_when_nothing_is_set() {
    clear_all();
    let config = from_env();
    assert!(!config.verbose);
    assert!(!config.query_log);
    assert!(!config.skip_orchestration);
}

#[test]
#[serial]
fn from_env_reads_the_harness_flags() {
    clear_all();
    set("VERBOSE", "1");
    set("QUERY_LOG", "yes");
    set("DOCKER_SETUP", "0");

    let config = from_env();
    assert!(config.verbose);
    assert!(config.query_log);
    assert!(config.skip_orchestration);
    clear_all();
}
