//! Engine settings persistence
//!
//! Loads and saves [`EngineSettings`] as JSON. The settings choose the
//! starting layout and whether each legality recomputation is logged.
//!
//! # Error Handling
//!
//! [`EngineSettings::load`] reports every failure to the caller.
//! [`EngineSettings::load_or_default`] never fails: a missing or unreadable
//! file falls back to the defaults with a logged warning.

use crate::board::Position;
use crate::error::RulesResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Position a new game starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingLayout {
    /// Standard chess starting position
    #[default]
    Standard,
    /// Kings and rooks only, for practising castling
    CastlingDrill,
}

impl StartingLayout {
    pub fn position(self) -> Position {
        match self {
            StartingLayout::Standard => Position::standard(),
            StartingLayout::CastlingDrill => Position::castling_drill(),
        }
    }
}

/// User-tunable engine settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub layout: StartingLayout,
    /// Emit a debug event with the board after every recomputation
    pub log_legal_moves: bool,
}

impl EngineSettings {
    pub fn from_json(json: &str) -> RulesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> RulesResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> RulesResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Read settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> RulesResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}
