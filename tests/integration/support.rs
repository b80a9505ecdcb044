//! Shared stubs for the integration tests.

#![allow(dead_code)] // not every test module uses every stub
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use repco_testdb::application::ports::{
    Cleanup, ClientFactory, CommandRunner, LogSink, PortAllocator, RunSpec, TestSession,
};
use repco_testdb::domain::error::RunError;

// ── Command runner stub ───────────────────────────────────────────────────────

/// Records every run; fails runs whose args contain the fail token.
#[derive(Clone, Debug, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RunSpec>>>,
    fail_token: Option<&'static str>,
}

impl RecordingRunner {
    pub fn failing_on(token: &'static str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_token: Some(token),
        }
    }

    pub fn calls(&self) -> Vec<RunSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Flattened `command arg arg ...` lines, for order assertions.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|spec| format!("{} {}", spec.command, spec.args.join(" ")))
            .collect()
    }

    pub fn count_with_arg(&self, arg: &str) -> usize {
        self.calls()
            .iter()
            .filter(|spec| spec.args.iter().any(|a| a == arg))
            .count()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &RunSpec, sink: &dyn LogSink) -> Result<(), RunError> {
        // Honor the runner contract: one announce line before "spawning".
        sink.line(&format!("spawn: {} {}", spec.command, spec.args.join(" ")));
        self.calls.lock().unwrap().push(spec.clone());
        if let Some(token) = self.fail_token
            && spec.args.iter().any(|a| a == token)
        {
            return Err(RunError::Exited {
                command: spec.command.clone(),
                code: 1,
                output: " Command output:\nsimulated failure\n".to_string(),
            });
        }
        Ok(())
    }

    fn spawn(&self, spec: &RunSpec) -> Result<tokio::process::Child, RunError> {
        Err(RunError::Spawn {
            command: spec.command.clone(),
            source: std::io::Error::other("stub runner cannot spawn"),
        })
    }
}

// ── Test session stub ─────────────────────────────────────────────────────────

/// Collects comments and deferred cleanups like a test framework adapter.
#[derive(Clone, Default)]
pub struct StubSession {
    inner: Arc<StubSessionInner>,
}

#[derive(Default)]
struct StubSessionInner {
    comments: Mutex<Vec<String>>,
    cleanups: Mutex<Vec<Cleanup>>,
}

impl StubSession {
    pub fn comments(&self) -> Vec<String> {
        self.inner.comments.lock().unwrap().clone()
    }

    pub fn cleanup_count(&self) -> usize {
        self.inner.cleanups.lock().unwrap().len()
    }

    /// Run registered cleanups in registration order.
    pub async fn run_cleanups(&self) {
        let cleanups = std::mem::take(&mut *self.inner.cleanups.lock().unwrap());
        for cleanup in cleanups {
            cleanup.await;
        }
    }
}

impl TestSession for StubSession {
    fn comment(&self, msg: &str) {
        self.inner.comments.lock().unwrap().push(msg.to_string());
    }

    fn defer_cleanup(&self, cleanup: Cleanup) {
        self.inner.cleanups.lock().unwrap().push(cleanup);
    }
}

// ── Client factory stub ───────────────────────────────────────────────────────

/// Hands back the URL it was given instead of opening a connection, and
/// records whether a query sink was requested.
#[derive(Clone, Default)]
pub struct StubClientFactory {
    query_sinks_seen: Arc<Mutex<Vec<bool>>>,
}

impl StubClientFactory {
    pub fn query_sinks_seen(&self) -> Vec<bool> {
        self.query_sinks_seen.lock().unwrap().clone()
    }
}

impl ClientFactory for StubClientFactory {
    type Client = String;

    async fn connect(
        &self,
        url: &str,
        query_sink: Option<Arc<dyn LogSink>>,
    ) -> Result<String> {
        self.query_sinks_seen.lock().unwrap().push(query_sink.is_some());
        Ok(url.to_string())
    }
}

// ── Port allocator stub ───────────────────────────────────────────────────────

/// Hands out sequential ports from a fixed base.
pub struct SeqPortAllocator {
    next: AtomicU16,
}

impl SeqPortAllocator {
    pub fn starting_at(base: u16) -> Self {
        Self {
            next: AtomicU16::new(base),
        }
    }
}

impl PortAllocator for SeqPortAllocator {
    fn allocate(&self) -> Result<u16> {
        Ok(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
