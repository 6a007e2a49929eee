//! Configuration management for Tabframe
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_TAB_PADDING, DEFAULT_WIDGET_PADDING, KEY_NEXT_TAB,
    KEY_PREV_TAB, KEY_QUIT, MAX_PADDING,
};
use crate::ui::core::keymap::KeyBindings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub keys: KeysConfig,
    pub header: HeaderConfig,
    pub widgets: WidgetsConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// Key binding configuration, each action accepts several key specs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
    pub quit: Vec<String>,
}

/// Header (tab strip) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Blank columns left of each tab title
    pub tab_left_padding: u16,
    /// Blank columns right of each tab title
    pub tab_right_padding: u16,
    /// Start with tab switching disabled
    pub lock_tabs: bool,
}

/// Widget bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub left_padding: u16,
    pub right_padding: u16,
    /// Clear every widget right before a page becomes active
    pub clear_on_activation: bool,
}

/// Page body layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_alignment: PageAlignment,
}

/// Horizontal alignment of page content inside the body frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            next_tab: vec![KEY_NEXT_TAB.to_string()],
            prev_tab: vec![KEY_PREV_TAB.to_string()],
            quit: vec![KEY_QUIT.to_string()],
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            tab_left_padding: DEFAULT_TAB_PADDING,
            tab_right_padding: DEFAULT_TAB_PADDING,
            lock_tabs: false,
        }
    }
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            left_padding: DEFAULT_WIDGET_PADDING,
            right_padding: DEFAULT_WIDGET_PADDING,
            clear_on_activation: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a log filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let paddings = [
            ("header.tab_left_padding", self.header.tab_left_padding),
            ("header.tab_right_padding", self.header.tab_right_padding),
            ("widgets.left_padding", self.widgets.left_padding),
            ("widgets.right_padding", self.widgets.right_padding),
        ];
        for (name, value) in paddings {
            if value > MAX_PADDING {
                anyhow::bail!("{} cannot exceed {} columns, got {}", name, MAX_PADDING, value);
            }
        }

        if self.keys.quit.is_empty() {
            anyhow::bail!("keys.quit needs at least one key, the application could not be closed otherwise");
        }

        KeyBindings::from_config(&self.keys).context("Invalid key binding")?;
        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Tabframe Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
