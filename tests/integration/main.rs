//! Integration tests for the provisioning harness.
//!
//! Everything here is stub-driven — no real docker daemon or Postgres
//! server is required. The stubs implement the public port traits the same
//! way a test framework adapter would.

mod support;

mod config;
mod provision;
mod session;
