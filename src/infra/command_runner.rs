//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::application::ports::{CommandRunner, LogSink, RunSpec};
use crate::domain::error::RunError;

/// Production `CommandRunner`.
///
/// Output handling follows the run's verbosity: verbose runs stream each
/// stdout/stderr line to the sink as it arrives, quiet runs buffer both in
/// memory and surface them only inside a failure error. Passing tests stay
/// silent while failures keep their diagnostics.
///
/// No timeout is enforced — a hung external command hangs the caller. The
/// child is killed if the run future is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, spec: &RunSpec, sink: &dyn LogSink) -> Result<(), RunError> {
        sink.line(&format!("spawn: {} {}", spec.command, spec.args.join(" ")));

        let mut child = tokio::process::Command::new(&spec.command)
            .args(&spec.args)
            .envs(&spec.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                command: spec.command.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (status, captured) = if spec.verbose {
            let (status, (), ()) = tokio::join!(
                child.wait(),
                stream_lines(stdout, sink),
                stream_lines(stderr, sink),
            );
            (status, String::new())
        } else {
            let (status, out, err) = tokio::join!(child.wait(), slurp(stdout), slurp(stderr));
            (status, format!("{out}\n{err}"))
        };

        let status = status.map_err(|source| RunError::Wait {
            command: spec.command.clone(),
            source,
        })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(RunError::Exited {
                command: spec.command.clone(),
                code,
                output: if spec.verbose {
                    String::new()
                } else {
                    format!(" Command output:\n{captured}")
                },
            }),
            None => Err(RunError::Killed {
                command: spec.command.clone(),
            }),
        }
    }

    fn spawn(&self, spec: &RunSpec) -> Result<tokio::process::Child, RunError> {
        tokio::process::Command::new(&spec.command)
            .args(&spec.args)
            .envs(&spec.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                command: spec.command.clone(),
                source,
            })
    }
}

/// Forward each line of `reader` to the sink as it arrives.
async fn stream_lines(reader: Option<impl AsyncRead + Unpin>, sink: &dyn LogSink) {
    let Some(reader) = reader else { return };
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        sink.line(&line);
    }
}

/// Drain `reader` into a lossy string.
async fn slurp(reader: Option<impl AsyncRead + Unpin>) -> String {
    let Some(mut reader) = reader else {
        return String::new();
    };
    let mut buf = Vec::new();
    let _ = reader.read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).into_owned()
}
