//! `docroute serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docroute_config::{CliSettings, Config};
use docroute_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docroute.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Built site directory to serve (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (request and redirect logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            output_dir: self.output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting preview server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Serving: {}",
            config.build_resolved.output_dir.display()
        ));
        output.info(&format!(
            "Redirect rules: {}",
            config.redirect_table.len()
        ));

        let server_config = server_config_from_config(&config);
        let manifest = config.manifest()?;
        run_server(server_config, manifest, config.redirect_table).await?;

        Ok(())
    }
}
