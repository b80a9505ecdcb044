//! Harness configuration value object.
//!
//! The original harness read everything from ambient environment variables.
//! Here the configuration is an explicit object handed to the lifecycle
//! controller and binder; the environment is consulted once, in
//! `crate::infra::config::from_env`, and the process-wide `DATABASE_URL`
//! write survives only as an opt-in compatibility shim.

use std::path::PathBuf;

/// Compose project name prefix; the port number is appended to scope each
/// test session's container group.
pub const PROJECT_PREFIX: &str = "repco-postgres-test-";

/// Environment variable published to code under test when the ambient-URL
/// shim is enabled.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Settings for one harness instance.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Compose file describing the test database service.
    pub compose_file: PathBuf,
    /// Compose project name prefix, completed by the port number.
    pub project_prefix: String,
    /// Schema-reset command, treated as a black box. Must be forced and
    /// non-interactive: it runs unattended between bring-up and the test.
    pub migrate_command: String,
    pub migrate_args: Vec<String>,
    /// Stream child process output to the log sink instead of buffering it.
    pub verbose: bool,
    /// Skip all container orchestration; the database on the derived URL is
    /// assumed to be externally managed.
    pub skip_orchestration: bool,
    /// Report each executed query to the session's logging facility.
    pub query_log: bool,
    /// Publish the connection URL as `DATABASE_URL` process-wide. Never
    /// read from the environment; callers opt in explicitly.
    pub ambient_url: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compose_file: PathBuf::from("test/docker-compose.test.yml"),
            project_prefix: PROJECT_PREFIX.to_string(),
            migrate_command: "yarn".to_string(),
            migrate_args: ["prisma", "migrate", "reset", "-f", "--skip-generate"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            verbose: false,
            skip_orchestration: false,
            query_log: false,
            ambient_url: false,
        }
    }
}

impl HarnessConfig {
    #[must_use]
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    #[must_use]
    pub fn with_skip_orchestration(mut self, enabled: bool) -> Self {
        self.skip_orchestration = enabled;
        self
    }

    #[must_use]
    pub fn with_query_log(mut self, enabled: bool) -> Self {
        self.query_log = enabled;
        self
    }

    /// Enable the process-wide `DATABASE_URL` compatibility shim.
    #[must_use]
    pub fn with_ambient_url(mut self, enabled: bool) -> Self {
        self.ambient_url = enabled;
        self
    }
}
