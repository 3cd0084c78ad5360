//! Configuration system for PanelKit
//!
//! Hosts hand configuration values over once, when a panel is constructed.
//! Changing the configuration afterwards does not touch widgets or panels that
//! were already built.

use crate::error::{PanelError, Result};
use crate::theme::Typography;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global configuration for PanelKit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Point sizes for the font roles
    pub typography: Typography,
    /// Defaults for grid layouts
    pub grid: GridDefaults,
    /// Defaults for rich text blocks
    pub rich_text: RichTextDefaults,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used for targets without an explicit entry
    pub default_level: String,
    /// Category-specific log levels (category name -> level string)
    pub category_levels: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut category_levels = HashMap::new();
        category_levels.insert("core".to_string(), "info".to_string());
        category_levels.insert("widgets".to_string(), "info".to_string());
        // Layout logs every add call
        category_levels.insert("layout".to_string(), "warn".to_string());

        Self {
            default_level: "info".to_string(),
            category_levels,
        }
    }
}

/// Defaults for grid layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDefaults {
    pub columns: usize,
    pub horizontal_gap: u32,
    pub vertical_gap: u32,
    /// Padding applied on all sides when no border is supplied
    pub padding: u32,
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            columns: 3,
            horizontal_gap: 5,
            vertical_gap: 5,
            padding: 10,
        }
    }
}

/// Defaults for rich text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextDefaults {
    pub visible_lines: usize,
}

impl Default for RichTextDefaults {
    fn default() -> Self {
        Self { visible_lines: 6 }
    }
}

impl PanelConfig {
    /// Parse configuration from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents).map_err(|e| {
            PanelError::configuration(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Serialize configuration as pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Configuration manager shared between a host and its panels
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<PanelConfig>>,
}

impl ConfigManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::with_config(PanelConfig::default())
    }

    /// Create a configuration manager with custom config
    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a copy of the current configuration
    pub fn get_config(&self) -> PanelConfig {
        self.config.read().clone()
    }

    /// Update the configuration
    pub fn update_config<F>(&self, updater: F)
    where
        F: FnOnce(&mut PanelConfig),
    {
        updater(&mut *self.config.write());
    }

    /// Set log level for a specific category
    pub fn set_category_level(&self, category: &str, level: &str) {
        self.update_config(|config| {
            config
                .logging
                .category_levels
                .insert(category.to_string(), level.to_string());
        });
    }

    /// Get log level for a specific category
    pub fn get_category_level(&self, category: &str) -> Option<String> {
        self.config
            .read()
            .logging
            .category_levels
            .get(category)
            .cloned()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global configuration instance
static CONFIG_MANAGER: OnceLock<ConfigManager> = OnceLock::new();

/// Initialize the global configuration manager
pub fn init_config() -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(ConfigManager::new)
}

/// Initialize the global configuration manager with custom config.
/// Has no effect if the global manager already exists.
pub fn init_config_with(config: PanelConfig) -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(|| ConfigManager::with_config(config))
}

/// Get the global configuration manager
pub fn get_config_manager() -> Option<&'static ConfigManager> {
    CONFIG_MANAGER.get()
}
