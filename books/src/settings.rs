use anyhow::{ensure, Context as _, Result};
use books_core::models::SchemaName;
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use scylla_repositories::{settings as scylla_defaults, ScyllaSettings};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "books";
const ENV_PREFIX: &str = "BOOKS";

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub known_nodes: Vec<String>,
    pub keyspace: SchemaName,
    pub table: SchemaName,
    pub replication_factor: u32,
    pub request_timeout_ms: u64,
    pub scan_page_size: i32,
    pub provision_on_write: bool,
}

impl Settings {
    /// Rejects values the driver would panic on, or that make every request fail.
    fn validate(&self) -> Result<()> {
        ensure!(!self.known_nodes.is_empty(), "known_nodes must not be empty");
        ensure!(
            self.replication_factor > 0,
            "replication_factor must be at least 1, got {}",
            self.replication_factor
        );
        ensure!(
            self.request_timeout_ms > 0,
            "request_timeout_ms must be at least 1, got {}",
            self.request_timeout_ms
        );
        ensure!(
            self.scan_page_size > 0,
            "scan_page_size must be at least 1, got {}",
            self.scan_page_size
        );

        Ok(())
    }

    pub fn scylla_settings(&self) -> ScyllaSettings {
        let mut settings = ScyllaSettings::new(
            self.known_nodes.clone(),
            self.keyspace.clone(),
            self.table.clone(),
        );
        settings.replication_factor = self.replication_factor;
        settings.request_timeout_ms = self.request_timeout_ms;
        settings.scan_page_size = self.scan_page_size;
        settings
    }
}

/// Loads the config from, in increasing priority: built-in defaults, `books.toml` in the
/// working directory (or `path` if given, which then has to exist), and `BOOKS_*`
/// environment variables.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = defaults()?.add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("known_nodes"),
    );

    build(builder)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let builder = config::Config::builder()
        .set_default("known_nodes", vec!["127.0.0.1:9042"])?
        .set_default("keyspace", "books")?
        .set_default("table", "book")?
        .set_default(
            "replication_factor",
            i64::from(scylla_defaults::DEFAULT_REPLICATION_FACTOR),
        )?
        .set_default(
            "request_timeout_ms",
            scylla_defaults::DEFAULT_REQUEST_TIMEOUT_MS as i64,
        )?
        .set_default("scan_page_size", i64::from(scylla_defaults::DEFAULT_SCAN_PAGE_SIZE))?
        .set_default("provision_on_write", true)?;

    Ok(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = builder
        .build()
        .context("reading config")?
        .try_deserialize()
        .context("parsing config")?;

    settings.validate().context("invalid config")?;

    Ok(settings)
}
