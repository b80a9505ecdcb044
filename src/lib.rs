//! Ephemeral per-test Postgres provisioning for repco integration tests.
//!
//! A test session asks for a database; the harness allocates a free port,
//! brings up a compose project scoped to that port, runs the schema reset,
//! registers teardown with the session's cleanup mechanism, and hands back
//! a connected client. On any bring-up failure the project is torn down
//! before the error reaches the test.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod domain;
pub mod infra;
pub mod setup;
