//! Init command - initialize configuration file.

use nodemap::config::ConfigFile;

use super::common::GlobalArgs;
use crate::error::CliError;

/// Run the init command.
pub fn run(globals: &GlobalArgs) -> Result<(), CliError> {
    let path = &globals.config_path;

    if ConfigFile::ensure_exists_at(path)? {
        println!("Created configuration file: {}", path.display());
    } else {
        println!("Configuration file already exists: {}", path.display());
    }
    println!();
    println!("Edit this file to point NodeMap at your node API.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ini");
        let globals = GlobalArgs::new(Some(path.clone()), false);

        run(&globals).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "[api]\nbase_url = http://nodes.example.org/api\n").unwrap();
        run(&globals).unwrap();

        let config = globals.load_config().unwrap();
        assert_eq!(config.api.base_url, "http://nodes.example.org/api");
    }
}
