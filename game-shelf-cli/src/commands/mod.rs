pub(crate) mod config;
pub(crate) mod jobs;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod stats;
pub(crate) mod sync_game;

use std::future::Future;

use game_shelf_client::{BackendClient, ClientConfig, ConfigSource, ConfigSources, Library};

use crate::error::CliError;

/// Global flags every command may need.
pub(crate) struct Context {
    pub url: Option<String>,
    pub quiet: bool,
}

impl Context {
    /// Effective settings: `--url` over env over config file over defaults.
    pub(crate) fn config(&self) -> Result<(ClientConfig, ConfigSources), CliError> {
        let (mut config, mut sources) = ClientConfig::load()?;
        if let Some(url) = &self.url {
            config = config.with_base_url(url.as_str())?;
            sources.base_url = ConfigSource::CommandLine;
        }
        Ok((config, sources))
    }

    /// A library bound to the configured backend, plus the config it used.
    pub(crate) fn connect(&self) -> Result<(Library<BackendClient>, ClientConfig), CliError> {
        let (config, _) = self.config()?;
        log::debug!("Using backend at {}", config.base_url);
        let client = BackendClient::new(&config)?;
        Ok((Library::new(client), config))
    }
}

/// Run `fut` to completion on a fresh multi-threaded runtime.
pub(crate) fn block_on<F: Future>(fut: F) -> Result<F::Output, CliError> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    Ok(rt.block_on(fut))
}
