//! Configuration loading, validation, and management for Stylist.
//!
//! Loads configuration from `~/.stylist/config.toml` with environment
//! variable overrides. Every tunable of the composition engine lives here
//! with a documented default, so behavior can be adjusted without touching
//! the algorithms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use stylist_core::Pattern;

/// The root configuration structure.
///
/// Maps directly to `~/.stylist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default wardrobe snapshot (JSON array of items) used by the CLI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wardrobe_path: Option<String>,

    /// Compatibility rule tunables
    #[serde(default)]
    pub rules: RulesConfig,

    /// Outfit generator tunables
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Slot swap tunables
    #[serde(default)]
    pub swap: SwapConfig,
}

/// Tunables for the color, pattern and formality rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Colors that go with everything
    #[serde(default = "default_neutral_colors")]
    pub neutral_colors: Vec<String>,

    /// Patterns that count as visually busy
    #[serde(default = "default_busy_patterns")]
    pub busy_patterns: Vec<Pattern>,

    /// Maximum busy-patterned pieces per outfit
    #[serde(default = "default_max_busy_patterns")]
    pub max_busy_patterns: usize,

    /// How many formality bands an outfit may span (0 = exact agreement)
    #[serde(default)]
    pub formality_tolerance: u8,

    /// Color → colors it clashes with. Read symmetrically: listing
    /// `red = ["pink"]` also makes pink clash with red.
    #[serde(default = "default_clashes")]
    pub clashes: BTreeMap<String, Vec<String>>,
}

fn default_neutral_colors() -> Vec<String> {
    ["black", "white", "gray", "beige", "navy", "denim"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_clashes() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 8] = [
        ("red", &["orange", "pink", "green"]),
        ("orange", &["red", "purple", "blue"]),
        ("yellow", &["purple", "brown"]),
        ("green", &["red", "purple", "brown"]),
        ("blue", &["orange"]),
        ("purple", &["yellow", "green", "orange"]),
        ("pink", &["red", "brown"]),
        ("brown", &["yellow", "green", "pink"]),
    ];
    table
        .into_iter()
        .map(|(color, others)| {
            (
                color.to_string(),
                others.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

fn default_busy_patterns() -> Vec<Pattern> {
    vec![
        Pattern::Striped,
        Pattern::Floral,
        Pattern::Plaid,
        Pattern::Graphic,
    ]
}

fn default_max_busy_patterns() -> usize {
    1
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            neutral_colors: default_neutral_colors(),
            busy_patterns: default_busy_patterns(),
            max_busy_patterns: default_max_busy_patterns(),
            formality_tolerance: 0,
            clashes: default_clashes(),
        }
    }
}

/// Tunables for the randomized outfit generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Attempts before giving up with "no valid combination"
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Chance of building around a dress when both forms are possible
    #[serde(default = "default_dress_probability")]
    pub dress_probability: f64,

    /// Chance of trying to add outerwear
    #[serde(default = "default_one")]
    pub outerwear_probability: f64,

    /// Chance of trying to add shoes
    #[serde(default = "default_one")]
    pub shoes_probability: f64,

    /// Upper bound on accessories per outfit
    #[serde(default = "default_max_accessories")]
    pub max_accessories: usize,
}

fn default_max_attempts() -> u32 {
    25
}
fn default_dress_probability() -> f64 {
    0.3
}
fn default_one() -> f64 {
    1.0
}
fn default_max_accessories() -> usize {
    2
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            dress_probability: default_dress_probability(),
            outerwear_probability: default_one(),
            shoes_probability: default_one(),
            max_accessories: default_max_accessories(),
        }
    }
}

/// Tunables for the slot swap resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Re-apply the outfit's occasion when listing replacements
    #[serde(default)]
    pub rescope_to_occasion: bool,
}

/// Upper bound on `generator.max_attempts`.
pub const MAX_ATTEMPTS_CEILING: u32 = 50;

impl AppConfig {
    /// Load configuration from the default path (~/.stylist/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `STYLIST_WARDROBE`: wardrobe snapshot path
    /// - `STYLIST_MAX_ATTEMPTS`: generator attempt cap
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&Self::config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, then apply the environment overrides
    /// listed on [`AppConfig::load`].
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_overrides(
            std::env::var("STYLIST_WARDROBE").ok(),
            std::env::var("STYLIST_MAX_ATTEMPTS").ok(),
        )?;
        Ok(config)
    }

    fn apply_overrides(
        &mut self,
        wardrobe: Option<String>,
        max_attempts: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = wardrobe {
            self.wardrobe_path = Some(path);
        }

        if let Some(raw) = max_attempts {
            self.generator.max_attempts = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "STYLIST_MAX_ATTEMPTS must be a positive integer, got '{raw}'"
                ))
            })?;
            self.validate()?;
        }

        Ok(())
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".stylist")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;
        if generator.max_attempts == 0 || generator.max_attempts > MAX_ATTEMPTS_CEILING {
            return Err(ConfigError::ValidationError(format!(
                "generator.max_attempts must be between 1 and {MAX_ATTEMPTS_CEILING}"
            )));
        }

        for (name, p) in [
            ("dress_probability", generator.dress_probability),
            ("outerwear_probability", generator.outerwear_probability),
            ("shoes_probability", generator.shoes_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationError(format!(
                    "generator.{name} must be between 0.0 and 1.0"
                )));
            }
        }

        if self.rules.max_busy_patterns == 0 {
            return Err(ConfigError::ValidationError(
                "rules.max_busy_patterns must be at least 1".into(),
            ));
        }

        if self.rules.formality_tolerance > 2 {
            return Err(ConfigError::ValidationError(
                "rules.formality_tolerance must be 0, 1 or 2".into(),
            ));
        }

        if self
            .rules
            .clashes
            .iter()
            .any(|(color, others)| color.trim().is_empty() || others.iter().any(|c| c.trim().is_empty()))
        {
            return Err(ConfigError::ValidationError(
                "rules.clashes cannot contain empty color names".into(),
            ));
        }

        Ok(())
    }

    /// The wardrobe path to use: the explicit argument, else the configured one.
    pub fn wardrobe_path_or(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.wardrobe_path.as_ref().map(PathBuf::from))
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
