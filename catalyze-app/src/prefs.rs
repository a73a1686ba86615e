//! Persisted user preferences.
//!
//! The device-mode choice from the start-up modal is written to a TOML file
//! under the user config directory. The current shell writes the value but
//! never reads it back on start-up, matching the observed product behavior;
//! see DESIGN.md.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceMode {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceMode::Desktop => "desktop",
            DeviceMode::Tablet => "tablet",
            DeviceMode::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub device_mode: DeviceMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            device_mode: DeviceMode::Desktop,
        }
    }
}

#[derive(Debug, Snafu)]
pub enum PrefsError {
    #[snafu(display("No user config directory available"))]
    NoConfigDir,

    #[snafu(display("Failed to write preferences to {}: {source}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to read preferences from {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Malformed preferences file {}: {source}", path.display()))]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("Failed to encode preferences: {source}"))]
    Encode { source: toml::ser::Error },
}

fn default_path() -> Result<PathBuf, PrefsError> {
    dirs::config_dir()
        .context(NoConfigDirSnafu)
        .map(|dir| dir.join("catalyze").join("preferences.toml"))
}

impl Preferences {
    pub fn save(&self) -> Result<(), PrefsError> {
        self.save_to(&default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(WriteSnafu {
                path: path.to_path_buf(),
            })?;
        }
        let encoded = toml::to_string_pretty(self).context(EncodeSnafu)?;
        std::fs::write(path, encoded).context(WriteSnafu {
            path: path.to_path_buf(),
        })
    }

    pub fn load() -> Result<Self, PrefsError> {
        Self::load_from(&default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        let raw = std::fs::read_to_string(path).context(ReadSnafu {
            path: path.to_path_buf(),
        })?;
        toml::from_str(&raw).context(ParseSnafu {
            path: path.to_path_buf(),
        })
    }
}
