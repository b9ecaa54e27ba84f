mod book_listings;

pub use book_listings::*;
