//! Configuration for the dice app
//!
//! Precedence: CLI flag > config file > default.

use std::path::Path;

use dice_adapter::FaceStyle;
use dice_domain::RollResult;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Config file format (dice.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Face shown before the first roll
    pub initial_face: u8,

    /// Seed for a reproducible session; fresh entropy when absent
    pub seed: Option<u64>,

    /// How faces are drawn
    pub style: FaceStyle,

    /// Emit JSON lines instead of drawings
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_face: RollResult::MIN,
            seed: None,
            style: FaceStyle::default(),
            json: false,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub style: Option<FaceStyle>,
    pub json: bool,
}

/// Where rendered rolls go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Face(FaceStyle),
    Json,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.initial_result().map(|_| ())
    }

    pub fn initial_result(&self) -> Result<RollResult> {
        RollResult::new(self.initial_face)
            .map_err(|e| AppError::InvalidConfig(format!("initialFace: {}", e)))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(style) = overrides.style {
            self.style = style;
        }
        if overrides.json {
            self.json = true;
        }
        self
    }

    pub fn output(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Face(self.style)
        }
    }
}
