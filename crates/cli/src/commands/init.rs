//! `stylist init`: write a default config file.

use std::path::Path;

use stylist_config::AppConfig;

pub fn run(config_path: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_path = AppConfig::config_dir().join("config.toml");
    let path = config_path.unwrap_or(default_path.as_path());

    if path.exists() && !force {
        println!("Config already exists at: {}", path.display());
        println!("Edit it manually, or re-run with --force to overwrite it.");
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, AppConfig::default_toml())?;
    println!("Created config at: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set wardrobe_path in {} (or pass --wardrobe)", path.display());
    println!("  2. Run: stylist generate --event \"work/office\"");

    Ok(())
}
