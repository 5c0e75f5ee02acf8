//! `docroute check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docroute_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docroute.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loading already runs full validation (redirect table construction,
    /// navigation shape, hostname), so a successful load is a passing
    /// check.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending configuration key if
    /// validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;

        match &config.config_path {
            Some(path) => output.info(&format!("Configuration: {}", path.display())),
            None => output.warning("No docroute.toml found, checked built-in defaults"),
        }
        output.info(&format!("Redirect rules: {}", config.redirect_table.len()));
        output.info(&format!("Navbar entries: {}", config.navbar.len()));
        output.info(&format!("Sidebar prefixes: {}", config.sidebar.len()));
        output.success("Configuration OK");

        Ok(())
    }
}
