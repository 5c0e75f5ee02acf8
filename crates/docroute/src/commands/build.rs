//! `docroute build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docroute_build::SiteBuilder;
use docroute_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docroute.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or output emission fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = config.build_resolved.output_dir.clone();
        output.info(&format!("Output directory: {}", output_dir.display()));

        let manifest = config.manifest()?;
        let report = SiteBuilder::new(manifest).build(&output_dir)?;

        output.info(&format!(
            "Manifest written: {}",
            report.manifest_path.display()
        ));
        if report.skipped > 0 {
            output.warning(&format!(
                "Skipped {} redirect page(s) colliding with existing content",
                report.skipped
            ));
        }
        output.success(&format!(
            "Build complete: {} redirect page(s)",
            report.redirect_pages
        ));

        Ok(())
    }
}
