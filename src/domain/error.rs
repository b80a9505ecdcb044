//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra` or `crate::application`.
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Process runner errors ─────────────────────────────────────────────────────

/// Failure of one external process invocation.
///
/// `Exited::output` is pre-rendered diagnostic text: empty when the run was
/// verbose (the output already went to the log sink line by line), otherwise
/// the captured stdout/stderr under a `Command output:` header, so the
/// failure message alone is enough to diagnose a quiet run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command could not be started at all (e.g. binary not found).
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command started but waiting on it failed.
    #[error("failed waiting for `{command}`")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran to completion with a failure exit code.
    #[error("command `{command}` exited with code {code}.{output}")]
    Exited {
        command: String,
        code: i32,
        output: String,
    },

    /// The command was terminated by a signal and reported no exit code.
    #[error("command `{command}` was terminated by a signal")]
    Killed { command: String },
}
