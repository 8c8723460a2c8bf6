//! Config command handler

use anyhow::Result;
use std::path::Path;

use crate::cli::SourceArgs;
use crate::config::Config;

/// Print the effective configuration after all layers are applied
pub fn handle_config_command(sources: SourceArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = Config::load(config_path)?;
    config.apply_overrides(sources.into_overrides());

    match config_path.map(Path::to_path_buf).or_else(Config::default_path) {
        Some(path) => println!("# config file: {}", path.display()),
        None => println!("# no config directory available"),
    }
    print!("{}", config.to_toml_string()?);

    config.validate()
}
