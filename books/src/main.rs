use anyhow::{Context as _, Result};
use books_core::{models, services::BookListingService};
use clap::{Parser, Subcommand};
use scylla_repositories::ScyllaRepository;
use std::{io::Write as _, path::PathBuf};
use tracing_subscriber::EnvFilter;

mod settings;

#[derive(Debug, Parser)]
#[clap(version, about = "Book listings stored in ScyllaDB.")]
struct Args {
    /// Config file to read instead of ./books.toml
    #[clap(long, global = true, value_name = "path")]
    config: Option<PathBuf>,

    /// Contact node, overrides the configured nodes. May be repeated.
    #[clap(long = "node", global = true, value_name = "host:port")]
    nodes: Vec<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the keyspace and table if they are missing
    Migrate,
    /// Create a book listing and print it
    Create {
        #[clap(long, default_value = "")]
        title: String,
        #[clap(long, default_value = "")]
        bookname: String,
        #[clap(long, default_value = "")]
        description: String,
        #[clap(long, default_value = "")]
        author: String,
    },
    /// Print all book listings
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber")?;

    let mut settings = settings::load(args.config.as_deref())?;
    if !args.nodes.is_empty() {
        settings.known_nodes = args.nodes;
    }

    let repository = ScyllaRepository::connect(&settings.scylla_settings())
        .await
        .context("connecting to scylla")?;
    let repository: &'static ScyllaRepository = Box::leak(Box::new(repository));

    let service =
        BookListingService::new(repository).with_provision_on_write(settings.provision_on_write);

    match args.command {
        Command::Migrate => {
            service
                .provision_schema()
                .await
                .context("provisioning schema")?;

            tracing::info!(
                keyspace = %repository.keyspace(),
                table = %repository.table(),
                "schema is up to date"
            );
        }
        Command::Create {
            title,
            bookname,
            description,
            author,
        } => {
            let input = models::CreateBookListing {
                title,
                bookname,
                description,
                author,
            };

            let listing = service
                .create_book_listing(&input)
                .await
                .context("creating book listing")?;

            print_json(&listing)?;
        }
        Command::List => {
            let listings = service
                .read_book_listings()
                .await
                .context("reading book listings")?;

            print_json(&listings)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    serde_json::to_writer_pretty(&mut stdout, value).context("serializing output")?;
    writeln!(stdout)?;

    Ok(())
}
