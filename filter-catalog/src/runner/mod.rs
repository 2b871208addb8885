//! Orchestrates a catalog run.
//!
//! Repositories are processed one at a time. Each checkout is removed before
//! the next repository is cloned, and the scratch workspace is removed
//! before the document is published.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::catalog::{Catalog, TableRenderer};
use crate::discovery::{discover_repositories, Repository};
use crate::fetcher::{clone_repository, ScratchWorkspace};
use crate::metadata::extract_record;
use crate::publisher::{compose_document, load_template, publish};
use crate::scanner::scan_plugin_directories;
use crate::summary::{RepositoryOutcome, RunSummary};
use octocrab::Octocrab;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, info_span, warn, Instrument};

/// Orchestrates a full discovery, scan and publish run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    renderer: TableRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder();
        if let Some(api_url) = config.api_url() {
            builder = builder.base_uri(api_url)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
            renderer: TableRenderer::new()?,
            config,
        })
    }

    /// Executes the full orchestration flow.
    ///
    /// The template is read first so a missing template fails the run before
    /// anything is cloned.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());

        info!(path = %self.config.template_path().display(), "Loading template");
        let template = load_template(self.config.template_path())?;

        let repositories = discover_repositories(
            &self.octocrab,
            self.config.topic(),
            self.config.excluded_owners(),
        )
        .await?;

        if repositories.is_empty() {
            warn!(topic = %self.config.topic(), "No repositories found");
        }
        summary.repositories_discovered = repositories.len();

        let catalog = collect_filters(
            &repositories,
            self.config.scratch_root(),
            self.config.clone_timeout(),
            &mut summary,
        )
        .await?;

        let table = catalog.render(&self.renderer)?;
        let document = compose_document(&template, &table);

        if self.config.dry_run() {
            println!(
                "\n[DRY RUN] Would write {}:\n",
                self.config.output_path().display()
            );
            println!("{document}");
        } else {
            publish(self.config.output_path(), &document)?;
        }

        Ok(summary)
    }
}

/// Clones and scans every repository in order and collects their filters.
///
/// # Errors
///
/// Only failing to create the scratch workspace is an error. Failed clones
/// and bad descriptors are logged and recorded in `summary`.
pub async fn collect_filters(
    repositories: &[Repository],
    scratch_root: Option<&Path>,
    clone_timeout: Option<Duration>,
    summary: &mut RunSummary,
) -> Result<Catalog, RunnerError> {
    let workspace = ScratchWorkspace::create(scratch_root)?;
    let mut catalog = Catalog::new();

    for (index, repository) in repositories.iter().enumerate() {
        info!(
            repo = %repository.full_name,
            "[{}/{}] Processing repository",
            index + 1,
            repositories.len()
        );

        let outcome = process_repository(repository, workspace.path(), clone_timeout).await;
        summary.record_outcome(&outcome);

        if let RepositoryOutcome::Scanned { records, .. } = outcome {
            catalog.extend(records);
        }
    }

    if let Err(e) = workspace.close() {
        warn!(error = %e, "Failed to remove scratch workspace");
    }

    summary.name_collisions = catalog.collisions();
    info!(filters = catalog.len(), "Catalog complete");
    Ok(catalog)
}

async fn process_repository(
    repository: &Repository,
    workspace: &Path,
    clone_timeout: Option<Duration>,
) -> RepositoryOutcome {
    let span = info_span!("repository", repo = %repository.full_name);

    async {
        let checkout = match clone_repository(repository, workspace, clone_timeout).await {
            Ok(checkout) => checkout,
            Err(e) => {
                error!(error = %e, "Failed to clone repository");
                return RepositoryOutcome::Failed {
                    repository: repository.full_name.clone(),
                    error: e.to_string(),
                };
            }
        };

        let plugins = match scan_plugin_directories(checkout.path()) {
            Ok(plugins) => plugins,
            Err(e) => {
                error!(error = %e, "Failed to scan repository");
                return RepositoryOutcome::Failed {
                    repository: repository.full_name.clone(),
                    error: e.to_string(),
                };
            }
        };

        let mut records = Vec::with_capacity(plugins.len());
        let mut skipped = 0;
        for plugin in &plugins {
            match extract_record(checkout.path(), plugin, repository) {
                Ok(record) => {
                    info!(plugin = %plugin, language = %record.language, "Added filter");
                    records.push(record);
                }
                Err(e) => {
                    warn!(plugin = %plugin, error = %e, "Skipping filter with invalid descriptor");
                    skipped += 1;
                }
            }
        }

        if let Err(e) = checkout.close() {
            warn!(error = %e, "Failed to remove checkout");
        }

        RepositoryOutcome::Scanned {
            records,
            skipped,
        }
    }
    .instrument(span)
    .await
}
