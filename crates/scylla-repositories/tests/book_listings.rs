//! Runs against a live cluster. Set `SCYLLA_URI` (ex. `127.0.0.1:9042`) to enable,
//! otherwise every test returns early. Each test gets its own keyspace.

use books_core::{
    models::{CreateBookListing, SchemaName},
    repositories::{BookListingRepository, Error},
    services::BookListingService,
};
use scylla_repositories::{ScyllaRepository, ScyllaSettings};
use std::collections::HashSet;

async fn repository() -> Option<&'static ScyllaRepository> {
    let uri = match std::env::var("SCYLLA_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("SCYLLA_URI not set, skipping");
            return None;
        }
    };

    let keyspace: SchemaName = format!("books_test_{}", uuid::Uuid::new_v4().simple())
        .parse()
        .unwrap();

    let mut settings = ScyllaSettings::new(vec![uri], keyspace, "book".parse().unwrap());
    settings.replication_factor = 1;
    settings.scan_page_size = 2;

    let repository = ScyllaRepository::connect(&settings).await.unwrap();
    Some(Box::leak(Box::new(repository)))
}

fn input(title: &str) -> CreateBookListing {
    CreateBookListing {
        title: title.to_owned(),
        bookname: "B".to_owned(),
        description: "D".to_owned(),
        author: "A".to_owned(),
    }
}

#[tokio::test]
async fn test_create_then_read() {
    let repository = match repository().await {
        Some(repository) => repository,
        None => return,
    };
    let service = BookListingService::new(repository);

    let created = service.create_book_listing(&input("T")).await.unwrap();
    assert_eq!(created.id.into_uuid().get_version_num(), 7);
    assert_eq!(created.title, "T");

    let listings = service.read_book_listings().await.unwrap();
    assert_eq!(listings, vec![created]);
}

#[tokio::test]
async fn test_read_without_table_is_read_error() {
    let repository = match repository().await {
        Some(repository) => repository,
        None => return,
    };

    let err = repository.list_book_listings().await.unwrap_err();
    assert!(matches!(err, Error::Read(_)), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let repository = match repository().await {
        Some(repository) => repository,
        None => return,
    };
    let keyspace = repository.keyspace();
    let table = repository.table();

    assert!(!repository.namespace_exists(keyspace).await.unwrap());
    assert!(!repository.table_exists(keyspace, table).await.unwrap());

    repository.ensure_schema().await.unwrap();
    assert!(repository.namespace_exists(keyspace).await.unwrap());
    assert!(repository.table_exists(keyspace, table).await.unwrap());
    assert!(repository.list_book_listings().await.unwrap().is_empty());

    let service = BookListingService::new(repository).with_provision_on_write(false);
    let created = service.create_book_listing(&input("T")).await.unwrap();

    repository.ensure_schema().await.unwrap();
    assert_eq!(repository.list_book_listings().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_concurrent_creates_on_fresh_keyspace() {
    let repository = match repository().await {
        Some(repository) => repository,
        None => return,
    };
    let service = BookListingService::new(repository);

    let first_input = input("1");
    let second_input = input("2");

    let (first, second) = futures::join!(
        service.create_book_listing(&first_input),
        service.create_book_listing(&second_input),
    );
    let (first, second) = (first.unwrap(), second.unwrap());
    assert_ne!(first.id, second.id);

    let ids = service
        .read_book_listings()
        .await
        .unwrap()
        .into_iter()
        .map(|listing| listing.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids, HashSet::from([first.id, second.id]));
}

#[tokio::test]
async fn test_scan_spans_pages() {
    let repository = match repository().await {
        Some(repository) => repository,
        None => return,
    };
    let service = BookListingService::new(repository);

    let mut created = HashSet::new();
    for i in 0..5 {
        let listing = service
            .create_book_listing(&input(&i.to_string()))
            .await
            .unwrap();
        created.insert(listing.id);
    }

    let read = service
        .read_book_listings()
        .await
        .unwrap()
        .into_iter()
        .map(|listing| listing.id)
        .collect::<HashSet<_>>();
    assert_eq!(read, created);
}
