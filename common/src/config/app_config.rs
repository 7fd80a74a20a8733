use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    file_path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, AppConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub log_prefix: Option<String>,
    /// Fixed seed for the random bots; a fresh one is drawn when unset.
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        self.output.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "tictactoe_results".to_string(),
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output directory must not be empty".to_string());
        }
        Ok(())
    }
}

pub type Rgb = [u8; 3];

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background_color: Rgb,
    pub axis_color: Rgb,
    pub x_wins_color: Rgb,
    pub o_wins_color: Rgb,
    pub draws_color: Rgb,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 40,
            background_color: [255, 255, 255],
            axis_color: [40, 40, 40],
            x_wins_color: [52, 101, 164],
            o_wins_color: [204, 0, 0],
            draws_color: [115, 210, 22],
        }
    }
}

impl Validate for ChartConfig {
    fn validate(&self) -> Result<(), String> {
        if !(100..=4096).contains(&self.width) {
            return Err("chart width must be between 100 and 4096".to_string());
        }
        if !(100..=4096).contains(&self.height) {
            return Err("chart height must be between 100 and 4096".to_string());
        }
        let room = self.width.min(self.height);
        if self.margin.checked_mul(2).is_none_or(|both| both >= room) {
            return Err(format!(
                "chart margin ({}) leaves no room to draw on a {}x{} chart",
                self.margin, self.width, self.height
            ));
        }
        Ok(())
    }
}
