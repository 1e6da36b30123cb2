//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path` commands
//! for viewing and modifying configuration settings from the command line.

use clap::Subcommand;
use nodemap::config::{ConfigFile, ConfigKey};

use super::common::GlobalArgs;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., api.base_url)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., api.base_url)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(globals: &GlobalArgs, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let config = globals.load_config()?;
            println!("{}", get_value(&config, &key)?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = globals.load_config()?;
            let name = set_value(&mut config, &key, &value)?;
            config.save_to(&globals.config_path)?;
            println!("Set {} = {}", name, value);
        }
        ConfigCommands::List => {
            let config = globals.load_config()?;
            print!("{}", list_values(&config));
        }
        ConfigCommands::Path => println!("{}", globals.config_path.display()),
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'nodemap config list' to see available keys.",
            key
        ))
    })
}

/// Value of `key`, or "(not set)" when empty.
fn get_value(config: &ConfigFile, key: &str) -> Result<String, CliError> {
    let value = parse_key(key)?.get(config);
    if value.is_empty() {
        Ok("(not set)".to_string())
    } else {
        Ok(value)
    }
}

/// Validate and store `value`; returns the canonical key name.
fn set_value(config: &mut ConfigFile, key: &str, value: &str) -> Result<&'static str, CliError> {
    let config_key = parse_key(key)?;
    config_key.set(config, value)?;
    Ok(config_key.name())
}

fn list_values(config: &ConfigFile) -> String {
    let mut out = String::from("Configuration Settings\n======================\n\n");
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Print section header when section changes
        if section != current_section {
            if !current_section.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section));
            current_section = section;
        }

        let value = key.get(config);
        if value.is_empty() {
            out.push_str(&format!("  {} = (not set)\n", key.key_name()));
        } else {
            out.push_str(&format!("  {} = {}\n", key.key_name(), value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_default_values() {
        let config = ConfigFile::default();
        assert_eq!(
            get_value(&config, "api.base_url").unwrap(),
            "http://localhost:8000/api/v1"
        );
        assert_eq!(get_value(&config, "cluster.disable_at_zoom").unwrap(), "(not set)");
    }

    #[test]
    fn test_unknown_key() {
        let config = ConfigFile::default();
        assert!(matches!(
            get_value(&config, "api.password"),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_invalid_value() {
        let mut config = ConfigFile::default();
        assert!(matches!(
            set_value(&mut config, "map.zoom", "30"),
            Err(CliError::ConfigFile(_))
        ));
    }

    #[test]
    fn test_set_then_save_to_custom_path() {
        let dir = tempdir().unwrap();
        let globals = GlobalArgs::new(Some(dir.path().join("config.ini")), false);

        run(
            &globals,
            ConfigCommands::Set {
                key: "map.zoom".to_string(),
                value: "12".to_string(),
            },
        )
        .unwrap();

        let config = globals.load_config().unwrap();
        assert_eq!(get_value(&config, "map.zoom").unwrap(), "12");
    }

    #[test]
    fn test_list_groups_by_section() {
        let text = list_values(&ConfigFile::default());

        let api = text.find("[api]").unwrap();
        let map = text.find("[map]").unwrap();
        let cluster = text.find("[cluster]").unwrap();
        assert!(api < map && map < cluster);
        assert!(text.contains("  max_radius = 80"));
    }
}
