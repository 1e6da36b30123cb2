//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use nodemap::app::{AppConfig, MapApplication};
use nodemap::config::{config_file_path, ConfigFile};
use nodemap::logging::{init_logging, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Options every command receives from the global flags.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    /// Config file in use (`--config` or the default location)
    pub config_path: PathBuf,
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config_path: config_path.unwrap_or_else(config_file_path),
            verbose,
        }
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load_config(&self) -> Result<ConfigFile, CliError> {
        Ok(ConfigFile::load_from(&self.config_path)?)
    }
}

/// Overrides for the API and view shared by `load` and `clusters`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ApiOverrides {
    /// API base URL (overrides api.base_url)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Zoom level used for clustering (overrides map.zoom)
    #[arg(long)]
    pub zoom: Option<u8>,
}

/// Resolve the application config: CLI takes precedence, then config file.
pub fn resolve_app_config(
    overrides: &ApiOverrides,
    config: &ConfigFile,
) -> Result<AppConfig, CliError> {
    let mut app_config = AppConfig::from_config_file(config)?;

    if let Some(url) = &overrides.api_url {
        app_config = app_config.with_base_url(url.clone())?;
    }
    if let Some(zoom) = overrides.zoom {
        app_config = app_config.with_zoom(zoom)?;
    }

    Ok(app_config)
}

/// Runner for commands that talk to the API.
///
/// Keeps logging alive for its lifetime and owns the async runtime.
pub struct CliRunner {
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    runtime: tokio::runtime::Runtime,
    config: ConfigFile,
}

impl CliRunner {
    pub fn new(globals: &GlobalArgs) -> Result<Self, CliError> {
        let config = globals.load_config()?;
        let logging_guard = start_logging(&config.logging.file, globals.verbose)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(CliError::Runtime)?;

        Ok(Self {
            logging_guard,
            runtime,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("NodeMap v{}", env!("CARGO_PKG_VERSION"));
        info!("NodeMap CLI: {} command", command);
    }

    /// Start the application, loading every layer.
    pub fn start_app(&self, app_config: AppConfig) -> Result<MapApplication, CliError> {
        Ok(self.runtime.block_on(MapApplication::start(app_config))?)
    }
}

fn start_logging(log_file: &Path, verbose: bool) -> Result<LoggingGuard, CliError> {
    init_logging(log_file, verbose).map_err(|e| CliError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodemap::config::ConfigKey;
    use tempfile::tempdir;

    #[test]
    fn test_global_args_default_path() {
        let globals = GlobalArgs::new(None, false);
        assert_eq!(globals.config_path, config_file_path());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let globals = GlobalArgs::new(Some(dir.path().join("absent.ini")), false);

        let config = globals.load_config().unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = ConfigFile::default();
        ConfigKey::ApiBaseUrl
            .set(&mut config, "http://config.example/api/v1")
            .unwrap();

        let overrides = ApiOverrides {
            api_url: Some("http://cli.example/api/v1".to_string()),
            zoom: Some(14),
        };
        let app_config = resolve_app_config(&overrides, &config).unwrap();

        assert_eq!(app_config.api.base_url, "http://cli.example/api/v1");
        assert_eq!(app_config.view.zoom, 14);
    }

    #[test]
    fn test_config_used_without_overrides() {
        let mut config = ConfigFile::default();
        ConfigKey::ApiBaseUrl
            .set(&mut config, "http://config.example/api/v1")
            .unwrap();

        let app_config = resolve_app_config(&ApiOverrides::default(), &config).unwrap();
        assert_eq!(app_config.api.base_url, "http://config.example/api/v1");
    }

    #[test]
    fn test_api_url_override_must_be_http() {
        let overrides = ApiOverrides {
            api_url: Some("localhost:8000/api/v1".to_string()),
            zoom: None,
        };
        assert!(matches!(
            resolve_app_config(&overrides, &ConfigFile::default()),
            Err(CliError::App(_))
        ));
    }

    #[test]
    fn test_invalid_zoom_override() {
        let overrides = ApiOverrides {
            api_url: None,
            zoom: Some(25),
        };
        assert!(matches!(
            resolve_app_config(&overrides, &ConfigFile::default()),
            Err(CliError::App(_))
        ));
    }
}
