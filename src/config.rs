// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel configuration
//!
//! The tolerances are fixed absolute values. They are not rescaled to the
//! size of the mesh; a caller working at very large or very small scales has
//! to set them explicitly.

use crate::error::KernelError;
use crate::geometry::{DEFAULT_JITTER, PLANE_THICKNESS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`KernelConfig::load`]
pub const CONFIG_FILE: &str = "trimesh.toml";

/// Tolerances and offsets used by the checked kernel API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Maximum distance from a triangle's plane for a point to be on it
    pub plane_thickness: f64,
    /// Size of the nudges applied to the outside point in containment tests
    pub jitter: f64,
    /// Distance past the bounding box corner of the generated outside point
    pub exterior_margin: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            plane_thickness: PLANE_THICKNESS,
            jitter: DEFAULT_JITTER,
            exterior_margin: 1.0,
        }
    }
}

impl KernelConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: KernelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `trimesh.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Some(value) = env_f64("TRIMESH_PLANE_THICKNESS")? {
            config.plane_thickness = value;
        }

        if let Some(value) = env_f64("TRIMESH_JITTER")? {
            config.jitter = value;
        }

        if let Some(value) = env_f64("TRIMESH_EXTERIOR_MARGIN")? {
            config.exterior_margin = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Every value must be finite and strictly positive
    pub fn validate(&self) -> std::result::Result<(), KernelError> {
        let fields = [
            ("plane_thickness", self.plane_thickness),
            ("jitter", self.jitter),
            ("exterior_margin", self.exterior_margin),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(KernelError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn env_f64(name: &str) -> Result<Option<f64>> {
    match std::env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid value for {}: {:?}", name, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
