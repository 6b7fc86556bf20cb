//! Settings file, every key is optional.
//!
//! ```toml
//! dna_file_path = "data/AncestryDNA.txt"
//! base_pairs = 200
//! output_path = "output"
//!
//! [helix]
//! radius = 4.0
//! angular_step = 0.628
//! # either the rise per base or the rise per full turn, by default
//! # 4 * angular_step per base
//! vertical_step = 2.5
//! # pitch = 34.0
//! ```
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::helix::{HelixConfig, HelixError, HelixOptions};

pub const DEFAULT_BASE_PAIRS: usize = 200;
pub const DEFAULT_OUTPUT_PATH: &str = "output";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("base_pairs must be greater than 0")]
    InvalidBasePairs,
    #[error(transparent)]
    Helix(#[from] HelixError),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub dna_file_path: Option<PathBuf>,
    pub base_pairs: usize,
    pub output_path: PathBuf,
    pub helix: HelixOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dna_file_path: None,
            base_pairs: DEFAULT_BASE_PAIRS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            helix: HelixOptions::default(),
        }
    }
}

impl Settings {
    pub fn load<P>(filepath: P) -> Result<Self, SettingsError>
    where
        P: AsRef<Path>,
    {
        log::info!(
            "Loading configuration from {}",
            filepath.as_ref().display()
        );
        let contents = std::fs::read_to_string(filepath)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(contents)?;
        log::debug!("Settings: {settings:?}");
        Ok(settings)
    }

    /// Geometry from the `[helix]` table, with defaults for unset keys.
    pub fn helix_config(&self) -> Result<HelixConfig, SettingsError> {
        Ok(self.helix.resolve()?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.base_pairs == 0 {
            return Err(SettingsError::InvalidBasePairs);
        }
        self.helix_config()?;
        Ok(())
    }
}
