use books_core::{
    models::{self, SchemaName},
    repositories::{BookListingRepository, Error, Result},
};
use futures::StreamExt;
use scylla::{query::Query, FromRow};
use uuid::Uuid;

use crate::ScyllaRepository;

#[derive(Debug, FromRow)]
struct BookListing {
    id: Uuid,
    title: String,
    bookname: String,
    description: String,
    author: String,
}

impl Into<models::BookListing> for BookListing {
    fn into(self) -> models::BookListing {
        models::BookListing {
            id: self.id.into(),
            title: self.title,
            bookname: self.bookname,
            description: self.description,
            author: self.author,
        }
    }
}

pub(crate) fn insert_statement(keyspace: &SchemaName, table: &SchemaName) -> String {
    format!(
        r"
        INSERT INTO {}.{} (id, title, bookname, description, author)
        VALUES (?, ?, ?, ?, ?);
        ",
        keyspace, table,
    )
}

/// Column order has to match the fields of [`BookListing`], rows are decoded by position.
pub(crate) fn select_all_statement(keyspace: &SchemaName, table: &SchemaName) -> String {
    format!(
        r"
        SELECT id, title, bookname, description, author
        FROM {}.{};
        ",
        keyspace, table,
    )
}

#[async_trait::async_trait]
impl BookListingRepository for ScyllaRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.ensure_namespace(&self.keyspace).await?;
        self.ensure_table(&self.keyspace, &self.table).await?;

        Ok(())
    }

    async fn create_book_listing(&self, listing: &models::BookListing) -> Result<()> {
        self.query(
            insert_statement(&self.keyspace, &self.table),
            (
                listing.id.into_uuid(),
                listing.title.as_str(),
                listing.bookname.as_str(),
                listing.description.as_str(),
                listing.author.as_str(),
            ),
        )
        .await
        .map_err(Error::write)?;

        Ok(())
    }

    async fn list_book_listings(&self) -> Result<Vec<models::BookListing>> {
        let mut query = Query::new(select_all_statement(&self.keyspace, &self.table));
        query.set_page_size(self.scan_page_size);

        let rows = tokio::time::timeout(self.request_timeout, self.session.query_iter(query, ()))
            .await
            .map_err(Error::read)?
            .map_err(Error::read)?
            .into_typed::<BookListing>();
        futures::pin_mut!(rows);

        let mut listings: Vec<models::BookListing> = Vec::new();

        // Each page is fetched lazily, so every step is bounded separately.
        while let Some(row) = tokio::time::timeout(self.request_timeout, rows.next())
            .await
            .map_err(Error::read)?
        {
            listings.push(row.map_err(Error::read)?.into());
        }

        tracing::debug!(
            keyspace = %self.keyspace,
            table = %self.table,
            count = listings.len(),
            "scanned book listings"
        );

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(statement: &str) -> String {
        statement.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_insert_statement() {
        let statement = insert_statement(&"books".parse().unwrap(), &"book".parse().unwrap());

        assert_eq!(
            normalize(&statement),
            "INSERT INTO books.book (id, title, bookname, description, author) \
             VALUES (?, ?, ?, ?, ?);",
        );
    }

    #[test]
    fn test_select_all_statement() {
        let statement = select_all_statement(&"books".parse().unwrap(), &"book".parse().unwrap());

        assert_eq!(
            normalize(&statement),
            "SELECT id, title, bookname, description, author FROM books.book;",
        );
    }
}
