//! Configuration file management
//!
//! Loads TOML configuration files and provides simulator settings.
//! Default config path: ~/.config/tftcanvas/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_OUTPUT_SCALE, DEFAULT_THICKNESS,
    MAX_OUTPUT_SCALE,
};
use crate::utils::Rgb565;

/// Simulator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Panel geometry
    pub display: DisplayConfig,
    /// Colors and stroke
    pub appearance: AppearanceConfig,
    /// PNG export
    pub output: OutputConfig,
}

/// Panel geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

/// Colors and stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Text and line color (RRGGBB)
    pub foreground: String,
    /// Text background and clear color (RRGGBB)
    pub background: String,
    /// Highlight color for title bars (RRGGBB)
    pub accent: String,
    /// Line thickness
    pub thickness: u8,
}

/// PNG export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file
    pub path: String,
    /// Each panel pixel becomes a scale × scale block
    pub scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            appearance: AppearanceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            foreground: "ffffff".to_string(),
            background: "000000".to_string(),
            accent: "a9a9a9".to_string(),
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "tftcanvas.png".to_string(),
            scale: DEFAULT_OUTPUT_SCALE,
        }
    }
}

impl AppearanceConfig {
    /// Parse hex color, falling back to `fallback` on invalid input
    fn parse_color(hex: &str, fallback: Rgb565) -> Rgb565 {
        Rgb565::from_hex(hex).unwrap_or_else(|| {
            warn!("Invalid color {:?}, using {:#06x}", hex, fallback.raw());
            fallback
        })
    }

    pub fn foreground_color(&self) -> Rgb565 {
        Self::parse_color(&self.foreground, Rgb565::WHITE)
    }

    pub fn background_color(&self) -> Rgb565 {
        Self::parse_color(&self.background, Rgb565::BLACK)
    }

    pub fn accent_color(&self) -> Rgb565 {
        Self::parse_color(&self.accent, Rgb565::DARKGREY)
    }
}

impl OutputConfig {
    /// Scale clamped to the supported range
    pub fn effective_scale(&self) -> u32 {
        self.scale.clamp(1, MAX_OUTPUT_SCALE)
    }
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/tftcanvas/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. TFTCANVAS_CONFIG environment variable
        if let Ok(path) = std::env::var("TFTCANVAS_CONFIG") {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 2. User config: ~/.config/tftcanvas/config.toml
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config: /etc/tftcanvas/config.toml
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. TFTCANVAS_CONFIG environment variable
    /// 2. ~/.config/tftcanvas/config.toml (user config)
    /// 3. /etc/tftcanvas/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Write the default config template to the user config path
    pub fn write_default_config() -> Result<PathBuf> {
        let config_path =
            default_config_path().ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Write the default config template to `path`, creating parent directories
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, Self::template())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        info!("Wrote config template: {}", path.display());
        Ok(())
    }

    /// Commented default configuration
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# tftcanvas configuration

[display]
# Panel size in pixels
width = {width}
height = {height}

[appearance]
# Colors in RRGGBB hex
foreground = "{fg}"
background = "{bg}"
accent = "{accent}"
# Line thickness in pixels (lines grow by thickness / 2 around their origin)
thickness = {thickness}

[output]
# PNG written by the simulator
path = "{path}"
# Upscale factor (1-{max_scale})
scale = {scale}
"#,
            width = defaults.display.width,
            height = defaults.display.height,
            fg = defaults.appearance.foreground,
            bg = defaults.appearance.background,
            accent = defaults.appearance.accent,
            thickness = defaults.appearance.thickness,
            path = defaults.output.path,
            max_scale = MAX_OUTPUT_SCALE,
            scale = defaults.output.scale,
        )
    }
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tftcanvas").join("config.toml"))
}
