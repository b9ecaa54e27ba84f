use books_core::{
    models::SchemaName,
    repositories::{BoxError, Error, Result},
};
use scylla::{frame::value::ValueList, query::Query, QueryResult, Session, SessionBuilder};
use std::time::Duration;

mod book_listings;
mod schema;
pub mod settings;

pub use settings::ScyllaSettings;

pub struct ScyllaRepository {
    session: Session,
    keyspace: SchemaName,
    table: SchemaName,
    replication_factor: u32,
    request_timeout: Duration,
    scan_page_size: i32,
}

impl ScyllaRepository {
    /// Connects to the cluster. The keyspace is not selected on the session since it may
    /// not exist yet, statements use qualified table names instead.
    pub async fn connect(settings: &ScyllaSettings) -> Result<ScyllaRepository> {
        let request_timeout = settings.request_timeout();

        let session = tokio::time::timeout(
            request_timeout,
            SessionBuilder::new()
                .known_nodes(settings.known_nodes.as_slice())
                .build(),
        )
        .await
        .map_err(Error::connection)?
        .map_err(Error::connection)?;

        tracing::info!(known_nodes = ?settings.known_nodes, "connected to scylla");

        Ok(ScyllaRepository {
            session,
            keyspace: settings.keyspace.clone(),
            table: settings.table.clone(),
            replication_factor: settings.replication_factor,
            request_timeout,
            scan_page_size: settings.scan_page_size,
        })
    }

    pub fn keyspace(&self) -> &SchemaName {
        &self.keyspace
    }

    pub fn table(&self) -> &SchemaName {
        &self.table
    }

    async fn query(
        &self,
        query: impl Into<Query>,
        values: impl ValueList,
    ) -> Result<QueryResult, BoxError> {
        let result =
            tokio::time::timeout(self.request_timeout, self.session.query(query, values)).await??;

        Ok(result)
    }
}
