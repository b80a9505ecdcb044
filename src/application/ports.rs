//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::error::RunError;

// ── Value Types ───────────────────────────────────────────────────────────────

/// One external process invocation.
#[derive(Debug, Clone)]
pub struct RunSpec {
    /// Command name, resolvable on the execution path.
    pub command: String,
    /// Ordered argument list.
    pub args: Vec<String>,
    /// Environment overlay applied on top of the inherited environment.
    pub env: HashMap<String, String>,
    /// When set, child output streams to the log sink as it arrives instead
    /// of being buffered for failure diagnostics.
    pub verbose: bool,
}

impl RunSpec {
    #[must_use]
    pub fn new(command: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: command.into(),
            args: args.iter().map(ToString::to_string).collect(),
            env: HashMap::new(),
            verbose: false,
        }
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}

// ── Log Sink Port ─────────────────────────────────────────────────────────────

/// Receives one line of harness output.
///
/// Injected wherever the harness would otherwise write to ambient
/// stdout/stderr, so test frameworks can route diagnostics through their
/// own comment facility and tests can capture them.
pub trait LogSink: Send + Sync {
    fn line(&self, msg: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn line(&self, msg: &str) {
        self(msg);
    }
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or stubbed.
pub trait CommandRunner {
    /// Run a program to completion.
    ///
    /// Emits one announce line to `sink` before spawning. Resolves on exit
    /// code 0 and fails with a [`RunError`] otherwise; no retries and no
    /// timeout at this layer.
    ///
    /// Declared with an explicit `Send` future so teardown handles built
    /// over a runner can be deferred into cleanup registries.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Spawn`] if the process could not be started,
    /// [`RunError::Exited`] on a nonzero exit code (carrying the captured
    /// output for quiet runs), and [`RunError::Killed`] if the process was
    /// signal-terminated.
    fn run(
        &self,
        spec: &RunSpec,
        sink: &dyn LogSink,
    ) -> impl Future<Output = Result<(), RunError>> + Send;

    /// Spawn a program without waiting on it, handing the caller the raw
    /// child handle for direct inspection. The handle stays owned by the
    /// caller; it is killed on drop.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Spawn`] if the process could not be started.
    fn spawn(&self, spec: &RunSpec) -> Result<tokio::process::Child, RunError>;
}

// ── Port Allocator Port ───────────────────────────────────────────────────────

/// Supplies an available network port on demand.
pub trait PortAllocator {
    /// Allocate a free port, never returning the same port twice from one
    /// allocator instance.
    ///
    /// # Errors
    ///
    /// Returns an error if no free port can be found.
    fn allocate(&self) -> Result<u16>;
}

// ── Test Session Port ─────────────────────────────────────────────────────────

/// A deferred cleanup action, run after the owning test finishes.
pub type Cleanup = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// The slice of a test framework the binder needs: a logging facility and a
/// cleanup registry whose entries run after the test completes, pass or
/// fail.
pub trait TestSession {
    /// Report a diagnostic line through the test's logging facility.
    fn comment(&self, msg: &str);

    /// Register a cleanup action to run when the test session ends.
    fn defer_cleanup(&self, cleanup: Cleanup);
}

// ── Client Factory Port ───────────────────────────────────────────────────────

/// Builds a ready-to-query database client from a connection URL.
///
/// The harness never looks inside the client; constructing one is the
/// binder's only database-protocol dependency.
#[allow(async_fn_in_trait)]
pub trait ClientFactory {
    type Client;

    /// Connect to `url`. When `query_sink` is set, every executed statement
    /// is reported to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    async fn connect(
        &self,
        url: &str,
        query_sink: Option<Arc<dyn LogSink>>,
    ) -> Result<Self::Client>;
}
