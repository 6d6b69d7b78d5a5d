use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

/// Percent zoom bounds shared by the graph view and the zoom tool.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: 20,
            max: 500,
            step: 10,
        }
    }
}

impl ZoomBounds {
    /// The minimum bound as a renderer ratio (1.0 = 100%).
    pub fn min_ratio(&self) -> f64 {
        f64::from(self.min) / 100.0
    }

    /// Requires `min <= max` and a non-zero step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max || self.step == 0 {
            return Err(ConfigError::InvalidZoomBounds {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 80.0,
        }
    }
}

/// Viewer settings. Every field has a default, so a config file only needs the
/// keys it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub zoom: ZoomBounds,
    /// Node box at 100% zoom, used for hover placement.
    pub node_size: NodeSize,
    /// Selection outline width at 100% zoom, in pixels.
    pub selected_border_width: f64,
    /// Icon reference assigned to shell (image-based) tasks.
    pub shell_icon: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomBounds::default(),
            node_size: NodeSize::default(),
            selected_border_width: 2.0,
            shell_icon: "shell.svg".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load a viewer configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.zoom.validate()?;
        Ok(config)
    }
}
