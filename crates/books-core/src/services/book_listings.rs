use crate::{
    models,
    repositories::{BookListingRepository, Result},
};

/// Resolver layer for book listings. An API layer calls into this and maps the results
/// onto its own types.
pub struct BookListingService {
    repository: &'static dyn BookListingRepository,
    provision_on_write: bool,
}

impl BookListingService {
    pub fn new(repository: &'static dyn BookListingRepository) -> BookListingService {
        BookListingService {
            repository,
            provision_on_write: true,
        }
    }

    /// Whether `create_book_listing` provisions the schema before inserting. When disabled,
    /// `provision_schema` has to be run once up front.
    pub fn with_provision_on_write(mut self, provision_on_write: bool) -> BookListingService {
        self.provision_on_write = provision_on_write;
        self
    }

    pub async fn provision_schema(&self) -> Result<()> {
        self.repository.ensure_schema().await
    }

    pub async fn create_book_listing(
        &self,
        input: &models::CreateBookListing,
    ) -> Result<models::BookListing> {
        if self.provision_on_write {
            self.repository.ensure_schema().await?;
        }

        let listing = input.clone().into_book_listing(models::BookListingId::generate());

        self.repository
            .create_book_listing(&listing)
            .await
            .map_err(|err| {
                tracing::warn!(id = %listing.id, "creating book listing failed: {}", err);
                err
            })?;

        tracing::info!(id = %listing.id, "book listing created");

        Ok(listing)
    }

    /// Reads every listing. Does not provision the schema, a missing table is a read
    /// error.
    pub async fn read_book_listings(&self) -> Result<Vec<models::BookListing>> {
        let listings = self.repository.list_book_listings().await?;

        tracing::debug!(count = listings.len(), "book listings read");

        Ok(listings)
    }
}
