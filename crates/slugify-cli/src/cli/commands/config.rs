//! Config command: config file path and effective settings.

use anyhow::Result;
use slugify_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
