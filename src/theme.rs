//! Theme files for geometry and palette overrides
//!
//! A theme is a TOML document with optional `[metadata]`, `[geometry]` and
//! `[colors]` tables. Every key is optional; keys that are present replace
//! the corresponding `RenderConfig` field, the rest keep their values.

use std::path::Path;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::renderer::RenderConfig;

/// Overrides for a render configuration, loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    #[serde(default)]
    pub metadata: ThemeMetadata,
    #[serde(default)]
    pub geometry: ThemeGeometry,
    #[serde(default)]
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeGeometry {
    pub module_size: Option<f64>,
    pub border: Option<f64>,
    pub corner_radius: Option<f64>,
    pub dot_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub background: Option<String>,
    pub body: Option<String>,
    pub accent: Option<String>,
    pub frame: Option<String>,
}

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the overrides on top of `config`
    ///
    /// The result is not validated here; `render` validates it.
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        let g = &self.geometry;
        if let Some(v) = g.module_size {
            config.module_size = v;
        }
        if let Some(v) = g.border {
            config.border = v;
        }
        if let Some(v) = g.corner_radius {
            config.corner_radius = v;
        }
        if let Some(v) = g.dot_radius {
            config.dot_radius = v;
        }

        let c = &self.colors;
        if let Some(v) = &c.background {
            config.background = v.clone();
        }
        if let Some(v) = &c.body {
            config.body = v.clone();
        }
        if let Some(v) = &c.accent {
            config.accent = v.clone();
        }
        if let Some(v) = &c.frame {
            config.frame = v.clone();
        }
        config
    }
}
