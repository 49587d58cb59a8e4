//! `stylist config`: configuration management commands.

use std::path::Path;

use stylist_config::AppConfig;

use super::snapshot::load_config;

pub fn validate(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Validating configuration...");

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("  Config error: {e}");
            return Err(e.into());
        }
    };
    println!("  Config parsed successfully");

    let mut warnings = Vec::new();
    match config.wardrobe_path_or(None) {
        None => warnings.push("No wardrobe_path set; pass --wardrobe on each run".to_string()),
        Some(path) if !path.exists() => {
            warnings.push(format!("Wardrobe file not found: {}", path.display()))
        }
        Some(_) => {}
    }
    if config.generator.outerwear_probability == 0.0 && config.generator.shoes_probability == 0.0 {
        warnings.push("Outerwear and shoes are both disabled".to_string());
    }

    if warnings.is_empty() {
        println!("  All checks passed");
    } else {
        println!();
        for w in &warnings {
            println!("  warning: {w}");
        }
    }

    println!();
    println!("  Max attempts:     {}", config.generator.max_attempts);
    println!("  Dress chance:     {}", config.generator.dress_probability);
    println!("  Max accessories:  {}", config.generator.max_accessories);
    println!("  Busy pattern cap: {}", config.rules.max_busy_patterns);
    println!("  Clash entries:    {}", config.rules.clashes.len());

    Ok(())
}

pub fn show(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path).map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", AppConfig::config_dir().join("config.toml").display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_path_is_valid() {
        let path = stylist_config::AppConfig::config_dir().join("config.toml");
        assert!(path.to_str().unwrap().contains(".stylist"));
    }
}
