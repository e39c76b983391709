use crate::config::CONFIG_TEMPLATE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".casemap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, CONFIG_TEMPLATE)?;
    println!("Created .casemap.toml configuration file");

    Ok(())
}
