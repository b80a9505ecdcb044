//! One-call entry points for the common case: env-derived configuration,
//! OS port allocation, real compose orchestration, tokio-postgres client.

use anyhow::Result;

use crate::application::ports::TestSession;
use crate::application::services::provision::PostgresLifecycle;
use crate::application::services::session::{BindOptions, TestDb, bind, bind_pair};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config;
use crate::infra::db_client::{PgClientFactory, TestClient};
use crate::infra::network::OsPortAllocator;

/// Provision a database and bind it to `session`.
///
/// # Errors
///
/// Returns an error if port allocation, bring-up, or the client connection
/// fails. The compose project is torn down before the error surfaces.
pub async fn setup<S>(session: &S) -> Result<TestDb<TestClient>>
where
    S: TestSession + Clone + Send + Sync + 'static,
{
    setup_with(session, BindOptions::default()).await
}

/// Like [`setup`], with an explicit port or other options.
///
/// # Errors
///
/// See [`setup`].
pub async fn setup_with<S>(session: &S, opts: BindOptions) -> Result<TestDb<TestClient>>
where
    S: TestSession + Clone + Send + Sync + 'static,
{
    let lifecycle = PostgresLifecycle::new(TokioCommandRunner::new(), config::from_env());
    bind(
        session,
        &lifecycle,
        &OsPortAllocator::new(),
        &PgClientFactory,
        opts,
    )
    .await
}

/// Bind two isolated databases to one session, for tests that exercise
/// cross-instance interaction.
///
/// # Errors
///
/// See [`setup`].
pub async fn setup_pair<S>(session: &S) -> Result<(TestDb<TestClient>, TestDb<TestClient>)>
where
    S: TestSession + Clone + Send + Sync + 'static,
{
    let lifecycle = PostgresLifecycle::new(TokioCommandRunner::new(), config::from_env());
    let ports = OsPortAllocator::new();
    bind_pair(session, &lifecycle, &ports, &PgClientFactory).await
}
