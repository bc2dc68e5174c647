// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine configuration.
//!
//! Every field has a default matching the stock dependency view, so a config file only needs to
//! name what it overrides:
//!
//! ```toml
//! [layout]
//! node_width = 200.0
//!
//! [theme]
//! high = "#dc2626"
//!
//! [viewport]
//! device_pixel_ratio = 2.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Priority;
use crate::render::Color;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub theme: Theme,
    pub viewport: ViewportConfig,
}

impl EngineConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(ConfigError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&input)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }
}

/// Box sizes, gaps and margins in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub layer_gap: f64,
    pub node_gap: f64,
    pub margin: f64,
    pub top_margin: f64,
    pub surface_height: f64,
    /// Hard cap on layering scans.
    pub max_layer_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 168.0,
            node_height: 54.0,
            layer_gap: 64.0,
            node_gap: 18.0,
            margin: 20.0,
            top_margin: 20.0,
            surface_height: 400.0,
            max_layer_passes: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas color for backends that paint their own background.
    pub background: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub neutral: Color,
    pub node_fill: Color,
    pub edge: Color,
    pub id_text: Color,
    pub name_text: Color,
    pub placeholder_text: Color,
    pub font_family: String,
    pub mono_font_family: String,
    pub id_font_size: f64,
    pub name_font_size: f64,
    pub placeholder: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0f, 0x17, 0x2a),
            high: Color::rgb(0xef, 0x44, 0x44),
            medium: Color::rgb(0xf5, 0x9e, 0x0b),
            low: Color::rgb(0x22, 0xc5, 0x5e),
            neutral: Color::rgb(0x94, 0xa3, 0xb8),
            node_fill: Color::rgb(0x1e, 0x29, 0x3b),
            edge: Color::rgb(0x64, 0x74, 0x8b),
            id_text: Color::rgb(0x94, 0xa3, 0xb8),
            name_text: Color::rgb(0xe2, 0xe8, 0xf0),
            placeholder_text: Color::rgb(0x64, 0x74, 0x8b),
            font_family: "system-ui, sans-serif".to_owned(),
            mono_font_family: "ui-monospace, monospace".to_owned(),
            id_font_size: 10.0,
            name_font_size: 12.0,
            placeholder: "No dependencies between backlog items".to_owned(),
        }
    }
}

impl Theme {
    /// Border and accent color for a priority tier.
    pub fn priority_color(&self, priority: &Priority) -> Color {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
            Priority::Unset | Priority::Unranked(_) => self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Container width used when the caller does not supply one.
    pub width: f64,
    pub device_pixel_ratio: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 960.0, device_pixel_ratio: 1.0 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config TOML")]
    Parse(#[source] toml::de::Error),
}
