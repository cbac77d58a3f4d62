// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn default_delay_min() -> u64 {
    800
}

fn default_delay_max() -> u64 {
    1500
}

/// Assistant settings persisted as `assistant.json` in the user config dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_delay_min")]
    pub typing_delay_min_ms: u64,
    #[serde(default = "default_delay_max")]
    pub typing_delay_max_ms: u64,
    /// Fixed seed for reproducible sessions. `None` draws from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub schema_version: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: default_delay_min(),
            typing_delay_max_ms: default_delay_max(),
            rng_seed: None,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

impl AssistantConfig {
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("org", "wanderguide", "wanderguide")
            .map(|dirs| dirs.config_dir().join("assistant.json"))
            .unwrap_or_else(|| PathBuf::from("assistant.json"))
    }

    /// Loads from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!("[Config] Could not load {:?}: {}. Using defaults", path, e);
            Self::default()
        })
    }

    /// Missing files yield defaults; outdated schemas are migrated and written back.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("[Config] No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        log::debug!("[Config] Loading assistant config from: {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let mut config: AssistantConfig = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Config] JSON Parse error for {:?}: {}", path, e);
            e
        })?;

        if config.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Config] Migrating assistant.json from schema v{} to v{}",
                config.schema_version,
                CURRENT_SCHEMA_VERSION
            );

            // v0→v1: older files could hold an inverted delay range.
            if config.typing_delay_min_ms > config.typing_delay_max_ms {
                std::mem::swap(
                    &mut config.typing_delay_min_ms,
                    &mut config.typing_delay_max_ms,
                );
                log::info!("[Config] v0→v1: Swapped inverted typing delay bounds");
            }

            config.schema_version = CURRENT_SCHEMA_VERSION;
            if let Err(e) = config.save(path) {
                log::warn!("[Config] Could not write migrated config: {}", e);
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        log::debug!("[Config] Saving assistant config to {:?}", path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }

    /// Typing delay bounds in milliseconds, min ≤ max.
    pub fn typing_delay(&self) -> RangeInclusive<u64> {
        let lo = self.typing_delay_min_ms.min(self.typing_delay_max_ms);
        let hi = self.typing_delay_min_ms.max(self.typing_delay_max_ms);
        lo..=hi
    }

    pub fn without_delay(mut self) -> Self {
        self.typing_delay_min_ms = 0;
        self.typing_delay_max_ms = 0;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.rng_seed = seed;
        }
        self
    }
}
