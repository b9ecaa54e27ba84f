use std::fmt;
use uuid::Uuid;

/// Identifier of a book listing.
///
/// Generated ids are UUIDv7, so the leading 48 bits are the creation time in
/// milliseconds and ids sort roughly by creation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct BookListingId(Uuid);

impl BookListingId {
    pub fn generate() -> BookListingId {
        BookListingId(Uuid::now_v7())
    }

    pub fn into_uuid(self) -> Uuid {
        let BookListingId(uuid) = self;
        uuid
    }
}

impl From<Uuid> for BookListingId {
    fn from(uuid: Uuid) -> BookListingId {
        BookListingId(uuid)
    }
}

impl fmt::Display for BookListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BookListing {
    pub id: BookListingId,
    pub title: String,
    pub bookname: String,
    pub description: String,
    pub author: String,
}

/// Caller supplied fields of a new listing. Stored verbatim, empty strings included.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct CreateBookListing {
    pub title: String,
    pub bookname: String,
    pub description: String,
    pub author: String,
}

impl CreateBookListing {
    pub fn into_book_listing(self, id: BookListingId) -> BookListing {
        BookListing {
            id,
            title: self.title,
            bookname: self.bookname,
            description: self.description,
            author: self.author,
        }
    }
}
