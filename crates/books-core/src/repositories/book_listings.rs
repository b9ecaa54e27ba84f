use super::Result;
use crate::models;

#[async_trait::async_trait]
pub trait BookListingRepository: Send + Sync {
    /// Creates the namespace and table if they are missing. Safe to call repeatedly and
    /// concurrently.
    async fn ensure_schema(&self) -> Result<()>;

    /// Inserts a listing. Assumes the schema exists.
    async fn create_book_listing(&self, listing: &models::BookListing) -> Result<()>;

    /// Returns every listing, in whatever order storage yields them. Fails with
    /// [`super::Error::Read`] when the table does not exist.
    async fn list_book_listings(&self) -> Result<Vec<models::BookListing>>;
}
