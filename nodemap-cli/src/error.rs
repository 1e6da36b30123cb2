//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use nodemap::app::AppError;
use nodemap::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
    /// Application failed to start or rejected an operation
    App(AppError),
    /// Requested layer is not in the registry
    UnknownLayer { name: String, available: Vec<String> },
    /// Failed to render command output
    Output(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::App(AppError::Load(_)) | CliError::App(AppError::ClientCreation(_)) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. API server not running at the configured base URL");
                eprintln!("  2. Wrong base URL: nodemap config set api.base_url <url>");
                eprintln!("  3. Slow server: raise api.timeout in the config file");
            }
            CliError::UnknownLayer { available, .. } if !available.is_empty() => {
                eprintln!();
                eprintln!("Available layers:");
                for name in available {
                    eprintln!("  {}", name);
                }
            }
            CliError::ConfigFile(_) => {
                eprintln!();
                eprintln!("Run 'nodemap config path' to locate the config file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::App(e) => write!(f, "{}", e),
            CliError::UnknownLayer { name, .. } => write!(f, "Unknown layer '{}'", name),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::App(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}
