mod book_listings;
mod error;

pub use book_listings::*;
pub use error::*;
