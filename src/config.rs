//! Plate configuration (plates.yaml) parsing.
//!
//! The configuration names the threshold, the threshold arithmetic and the
//! four ink pairs that make up the 2x2 artwork. Every field has a default,
//! so an empty file reproduces the classic four-plate poster.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlatesError, Result};
use crate::render::ThresholdMode;
use crate::types::{Colour, MixAngle};

/// Number of plates in the 2x2 grid.
pub const PLATE_COUNT: usize = 4;

/// The two anchor colours of one plate. Their paint mix is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkPair {
    pub first: Colour,
    pub second: Colour,
}

impl InkPair {
    pub const fn new(first: Colour, second: Colour) -> Self {
        Self { first, second }
    }
}

/// Plate configuration loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatesConfig {
    /// Per-channel threshold of the separation gate.
    pub threshold: u8,

    /// Channel difference arithmetic of the separation gate.
    pub threshold_mode: ThresholdMode,

    /// Full-turn angle used when mixing each pair's hues.
    pub mix_angle: MixAngle,

    /// Ink pairs, in grid order: top-left, top-right, bottom-left, bottom-right.
    pub plates: Vec<InkPair>,
}

fn default_plates() -> Vec<InkPair> {
    vec![
        InkPair::new(Colour::rgb(0, 0, 255), Colour::WHITE),
        InkPair::new(Colour::rgb(16, 63, 255), Colour::BLACK),
        InkPair::new(Colour::rgb(255, 0, 0), Colour::rgb(255, 255, 0)),
        InkPair::new(Colour::rgb(16, 255, 255), Colour::rgb(255, 0, 255)),
    ]
}

impl Default for PlatesConfig {
    fn default() -> Self {
        Self {
            threshold: 255,
            threshold_mode: ThresholdMode::default(),
            mix_angle: MixAngle::default(),
            plates: default_plates(),
        }
    }
}

impl PlatesConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PlatesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| PlatesError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Colours are hex strings such as \"#10FFFF\"".to_string()),
        })
    }

    /// Check that the configuration can fill the plate grid.
    pub fn validate(&self) -> Result<()> {
        if self.plates.len() != PLATE_COUNT {
            return Err(PlatesError::Config {
                message: format!(
                    "expected {} ink pairs, found {}",
                    PLATE_COUNT,
                    self.plates.len()
                ),
                help: Some("The plates are tiled 2x2; list exactly four pairs".to_string()),
            });
        }
        Ok(())
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PlatesError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
