mod book_listings;
mod schema_name;

pub use book_listings::*;
pub use schema_name::*;
