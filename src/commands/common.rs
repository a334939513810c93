//! Common utilities shared across commands.

use crate::{
    cli::types::{FallbackPolicy, SourceMode},
    source::{ContractService, ContractStore, DataSource, Provenance},
    storage::{pool::redact_url, StoreConfig},
    Result,
};

use super::resolve_database_url;

/// Runtime options every data command needs
#[derive(Debug, Clone)]
pub struct ContextOptions {
    pub database_url: Option<String>,
    pub pool_size: usize,
    pub source: SourceMode,
    pub fallback: FallbackPolicy,
    pub verbose: bool,
}

/// Context containing the resources shared by data commands
pub struct CommandContext {
    pub config: StoreConfig,
    pub service: ContractService<DataSource>,
    pub verbose: bool,
}

impl CommandContext {
    /// Resolve configuration and pick the data source for this run
    pub async fn new(options: ContextOptions) -> Result<Self> {
        let url = resolve_database_url(options.database_url)?;
        let config = StoreConfig::new(url).with_pool_size(options.pool_size);

        if options.verbose && options.source == SourceMode::Live {
            println!("Connecting to {}...", redact_url(&config.database_url));
        }
        let source = DataSource::connect(options.source, &config).await;

        Ok(Self {
            config,
            service: ContractService::new(source, options.fallback),
            verbose: options.verbose,
        })
    }

    /// Build a context around an already selected source
    pub fn with_source(config: StoreConfig, source: DataSource, fallback: FallbackPolicy) -> Self {
        Self {
            config,
            service: ContractService::new(source, fallback),
            verbose: false,
        }
    }

    pub fn provenance(&self) -> Provenance {
        self.service.provenance()
    }

    /// One-line note on where the answer came from
    pub fn status_line(&self) -> String {
        match self.provenance() {
            Provenance::Live => format!("Source: {} ({})", Provenance::Live, redact_url(&self.config.database_url)),
            Provenance::Fixture if self.service.store().provenance() == Provenance::Live => {
                format!("Source: {} (database queries failed)", Provenance::Fixture)
            }
            Provenance::Fixture => format!("Source: {}", Provenance::Fixture),
        }
    }

    /// Print text output followed by the status line
    pub fn emit(&self, text: &str) {
        print!("{}", text);
        println!();
        println!("{}", self.status_line());
    }

    pub fn close(&self) {
        self.service.store().close();
    }
}
