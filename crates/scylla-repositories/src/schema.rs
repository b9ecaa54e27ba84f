use books_core::{
    models::SchemaName,
    repositories::{Error, Result},
};

use crate::ScyllaRepository;

pub(crate) fn create_keyspace_statement(keyspace: &SchemaName, replication_factor: u32) -> String {
    format!(
        "CREATE KEYSPACE IF NOT EXISTS {} \
         WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}};",
        keyspace, replication_factor,
    )
}

pub(crate) fn create_table_statement(keyspace: &SchemaName, table: &SchemaName) -> String {
    format!(
        r"
        CREATE TABLE IF NOT EXISTS {}.{} (
            id uuid PRIMARY KEY,
            title text,
            bookname text,
            description text,
            author text
        );
        ",
        keyspace, table,
    )
}

impl ScyllaRepository {
    pub async fn namespace_exists(&self, keyspace: &SchemaName) -> Result<bool> {
        let object = || format!("keyspace {}", keyspace);

        let row = self
            .query(
                r"
                SELECT keyspace_name
                FROM system_schema.keyspaces
                WHERE keyspace_name = ?;
                ",
                (keyspace.as_str(),),
            )
            .await
            .map_err(|err| Error::metadata_query(object(), err))?
            .maybe_first_row_typed::<(String,)>()
            .map_err(|err| Error::metadata_query(object(), err))?;

        Ok(row.is_some())
    }

    pub async fn ensure_namespace(&self, keyspace: &SchemaName) -> Result<()> {
        if self.namespace_exists(keyspace).await? {
            tracing::debug!(%keyspace, "keyspace already exists");
            return Ok(());
        }

        self.query(
            create_keyspace_statement(keyspace, self.replication_factor),
            (),
        )
        .await
        .map_err(|err| Error::schema_creation(format!("keyspace {}", keyspace), err))?;

        self.await_schema_agreement().await;

        tracing::info!(
            %keyspace,
            replication_factor = self.replication_factor,
            "keyspace created"
        );

        Ok(())
    }

    pub async fn table_exists(&self, keyspace: &SchemaName, table: &SchemaName) -> Result<bool> {
        let object = || format!("table {}.{}", keyspace, table);

        let row = self
            .query(
                r"
                SELECT table_name
                FROM system_schema.tables
                WHERE keyspace_name = ? AND table_name = ?;
                ",
                (keyspace.as_str(), table.as_str()),
            )
            .await
            .map_err(|err| Error::metadata_query(object(), err))?
            .maybe_first_row_typed::<(String,)>()
            .map_err(|err| Error::metadata_query(object(), err))?;

        Ok(row.is_some())
    }

    pub async fn ensure_table(&self, keyspace: &SchemaName, table: &SchemaName) -> Result<()> {
        if self.table_exists(keyspace, table).await? {
            tracing::debug!(%keyspace, %table, "table already exists");
            return Ok(());
        }

        self.query(create_table_statement(keyspace, table), ())
            .await
            .map_err(|err| Error::schema_creation(format!("table {}.{}", keyspace, table), err))?;

        self.await_schema_agreement().await;

        tracing::info!(%keyspace, %table, "table created");

        Ok(())
    }

    /// Waits for the new schema to reach every node, so the next statement does not hit a
    /// coordinator that has not seen it yet. Disagreement is logged and otherwise ignored,
    /// the following statement fails on its own if the schema is still missing.
    async fn await_schema_agreement(&self) {
        match self
            .session
            .await_timed_schema_agreement(self.request_timeout)
            .await
        {
            Ok(true) => (),
            Ok(false) => tracing::warn!("timed out waiting for schema agreement"),
            Err(err) => tracing::warn!("checking schema agreement failed: {}", err),
        }
    }
}
