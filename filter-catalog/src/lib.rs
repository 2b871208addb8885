#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod fetcher;
pub mod metadata;
pub mod publisher;
pub mod runner;
pub mod scanner;
pub mod summary;

pub use catalog::{Catalog, FilterRecord, TableRenderer, TemplateError, TABLE_HEADER};
pub use config::{CatalogConfig, ConfigError};
pub use discovery::{discover_repositories, DiscoveryError, ExcludedOwners, Repository};
pub use fetcher::{
    checkout_dir_name, clone_repository, FetchError, RepositoryCheckout, ScratchWorkspace,
};
pub use metadata::{extract_record, MetadataError, PluginDescriptor};
pub use publisher::{compose_document, load_template, publish, PublishError};
pub use runner::{collect_filters, Runner, RunnerConfig, RunnerError};
pub use scanner::{scan_plugin_directories, ScanError, DESCRIPTOR_FILE};
pub use summary::{RepositoryFailure, RepositoryOutcome, RunSummary};
