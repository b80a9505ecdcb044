//! Postgres client infrastructure — implements the `ClientFactory` port
//! over `tokio-postgres`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

use crate::application::ports::{ClientFactory, LogSink};

/// A database client bound to one provisioned instance.
///
/// Owns the connection task; dropping the client aborts it. When built
/// with a query sink, every executed statement is reported to it as
/// `QUERY: <sql>`.
pub struct TestClient {
    client: tokio_postgres::Client,
    connection_task: tokio::task::JoinHandle<()>,
    query_sink: Option<Arc<dyn LogSink>>,
}

impl TestClient {
    /// Connect to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(url: &str, query_sink: Option<Arc<dyn LogSink>>) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .with_context(|| format!("connecting to {url}"))?;
        // The connection future drives all traffic. If it errors, the
        // client's own calls fail with their own errors; nothing to add.
        let connection_task = tokio::spawn(async move {
            let _ = connection.await;
        });
        Ok(Self {
            client,
            connection_task,
            query_sink,
        })
    }

    fn trace(&self, sql: &str) {
        if let Some(sink) = &self.query_sink {
            sink.line(&format!("QUERY: {sql}"));
        }
    }

    /// Execute a statement, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        self.trace(sql);
        self.client
            .execute(sql, params)
            .await
            .with_context(|| format!("executing `{sql}`"))
    }

    /// Run a query and collect all rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        self.trace(sql);
        self.client
            .query(sql, params)
            .await
            .with_context(|| format!("querying `{sql}`"))
    }

    /// Run a query expected to return exactly one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or returns zero or many rows.
    pub async fn query_one(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Row> {
        self.trace(sql);
        self.client
            .query_one(sql, params)
            .await
            .with_context(|| format!("querying `{sql}`"))
    }

    /// Run a sequence of semicolon-separated statements.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails.
    pub async fn batch_execute(&self, sql: &str) -> Result<()> {
        self.trace(sql);
        self.client
            .batch_execute(sql)
            .await
            .context("executing statement batch")
    }
}

impl Drop for TestClient {
    fn drop(&mut self) {
        self.connection_task.abort();
    }
}

/// Production `ClientFactory` producing [`TestClient`]s.
pub struct PgClientFactory;

impl ClientFactory for PgClientFactory {
    type Client = TestClient;

    async fn connect(
        &self,
        url: &str,
        query_sink: Option<Arc<dyn LogSink>>,
    ) -> Result<TestClient> {
        TestClient::connect(url, query_sink).await
    }
}
