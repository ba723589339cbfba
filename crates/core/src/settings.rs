use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which extraction routine a scan feeds its text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Scale display: a single weight in kg.
    #[default]
    Weight,
    /// Label with a temperature followed by a weight.
    TemperatureWeight,
}

impl std::str::FromStr for ScanMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weight" => Ok(ScanMode::Weight),
            "temperature_weight" => Ok(ScanMode::TemperatureWeight),
            other => Err(format!("Unknown scan mode: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub mode: ScanMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub pretty: bool,
}

/// Recognition engine options for photos taken of scales and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Tesseract language code(s), e.g. `eng` or `eng+ind`.
    pub lang: String,
    /// Directory holding `*.traineddata`; the engine's own default when unset.
    pub data_path: Option<String>,
}

impl Default for OcrSettings {
    fn default() -> Self {
        OcrSettings {
            lang: "eng".to_string(),
            data_path: None,
        }
    }
}

/// ```toml
/// [scan]
/// mode = "temperature_weight"
///
/// [output]
/// pretty = true
///
/// [ocr]
/// lang = "eng+ind"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub output: OutputSettings,
    pub ocr: OcrSettings,
}

impl Settings {
    pub fn from_toml(toml_content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(toml_content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
