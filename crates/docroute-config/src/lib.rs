//! Configuration management for docroute.
//!
//! Parses `docroute.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.hostname`
//! - `server.host`
//! - `plugins.analytics_id`
//!
//! ## Redirects
//!
//! The `[redirects]` table maps legacy source paths to canonical
//! destination paths. The table is compiled into a validated
//! [`RedirectTable`] during load; duplicate sources (after trailing-slash
//! normalization) and non-absolute paths abort the load with the offending
//! key named.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docroute_redirects::{RedirectError, RedirectTable};
use docroute_site::{
    NavEntry, NavError, PluginOptions, SiteInfo, SiteManifest, ThemeOptions, validate_nav_entries,
    validate_sidebar,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docroute.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site information.
    pub site: SiteInfo,
    /// Theme options.
    pub theme: ThemeOptions,
    /// Plugin wiring.
    pub plugins: PluginOptions,
    /// Preview server configuration.
    pub server: ServerConfig,
    /// Build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Navbar entries, in display order.
    pub navbar: Vec<NavEntry>,
    /// Sidebar trees keyed by path prefix.
    pub sidebar: BTreeMap<String, Vec<NavEntry>>,
    /// Raw redirect mapping as written in TOML.
    redirects: BTreeMap<String, String>,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Compiled redirect table (set after loading).
    #[serde(skip)]
    pub redirect_table: RedirectTable,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Preview server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Directory the external generator writes the site into and where
    /// redirect pages and `manifest.json` are emitted.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Invalid redirect table entry.
    #[error("Configuration error: {0}")]
    Redirect(#[from] RedirectError),
    /// Invalid navigation or hostname shape.
    #[error("Configuration error: {0}")]
    Nav(#[from] NavError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.hostname`").
        field: String,
        /// Error message (e.g., "${`ANALYTICS_ID`} is not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docroute.toml` in current directory and
    /// parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing
    /// fails, or validation rejects the content.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Assemble the framework-facing manifest from the loaded
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::Nav`] if navigation or hostname shape is
    /// invalid (already checked during load, so this only fails for
    /// hand-assembled configs).
    pub fn manifest(&self) -> Result<SiteManifest, ConfigError> {
        let manifest = SiteManifest::new(
            self.site.clone(),
            self.theme.clone(),
            self.plugins.clone(),
            self.navbar.clone(),
            self.sidebar.clone(),
            self.redirect_table.rules().to_vec(),
        )?;
        Ok(manifest)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteInfo::default(),
            theme: ThemeOptions::default(),
            plugins: PluginOptions::default(),
            server: ServerConfig::default(),
            build: BuildConfigRaw::default(),
            navbar: Vec::new(),
            sidebar: BTreeMap::new(),
            redirects: BTreeMap::new(),
            build_resolved: BuildConfig {
                output_dir: base.join("dist"),
            },
            redirect_table: RedirectTable::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks server settings, navigation shape and the hostname required
    /// by enabled plugins. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;

        validate_nav_entries(&self.navbar)?;
        validate_sidebar(&self.sidebar)?;
        if self.plugins.requires_hostname() {
            self.site.validate_hostname()?;
        }

        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.hostname = expand::expand_env(&self.site.hostname, "site.hostname")?;
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(analytics_id) = self.plugins.analytics_id.take() {
            self.plugins.analytics_id =
                Some(expand::expand_env(&analytics_id, "plugins.analytics_id")?);
        }

        Ok(())
    }

    /// Resolve relative paths and compile the redirect table.
    ///
    /// The redirect table is the one place where duplicate sources are
    /// caught: two TOML keys that normalize to the same path (e.g.
    /// `"/cluster"` and `"/cluster/"`) abort the load here.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.build_resolved = BuildConfig {
            output_dir: config_dir.join(self.build.output_dir.as_deref().unwrap_or("dist")),
        };

        self.redirect_table = RedirectTable::from_pairs(
            self.redirects
                .iter()
                .map(|(source, destination)| (source.clone(), destination.clone())),
        )?;

        Ok(())
    }
}
