//! Board settings - initial viewport and zoom behavior, stored as JSON.

use crate::constants::{DEFAULT_CORNER, DEFAULT_SCALE, MIN_SCALE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME, ZOOM_STEP};
use crate::error::{SettingsError, SettingsResult};
use crate::input::coords::{Viewport, ZoomLimits, on_scale_grid};
use crate::types::WorldPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Scale the board opens at (quantized to one decimal)
    pub initial_scale: f64,
    /// World point at the screen's top-left when the board opens
    pub initial_corner: WorldPoint,
    /// Scale change per modified wheel notch
    pub zoom_step: f64,
    /// Scale floor
    pub min_scale: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            initial_scale: DEFAULT_SCALE,
            initial_corner: DEFAULT_CORNER,
            zoom_step: ZOOM_STEP,
            min_scale: MIN_SCALE,
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl BoardSettings {
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        debug!(path = %path.display(), "Loaded board settings");
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults if the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Using default board settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Every scale value must be a positive multiple of 0.1 so zooming stays
    /// on the one-decimal grid.
    pub fn validate(&self) -> SettingsResult<()> {
        for (name, value) in [
            ("min_scale", self.min_scale),
            ("zoom_step", self.zoom_step),
            ("initial_scale", self.initial_scale),
        ] {
            if !on_scale_grid(value) || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be a positive multiple of 0.1, got {value}"
                )));
            }
        }
        if self.initial_scale < self.min_scale {
            return Err(SettingsError::Invalid(format!(
                "initial_scale {} is below min_scale {}",
                self.initial_scale, self.min_scale
            )));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        let viewport = Viewport::new(self.initial_scale, self.initial_corner);
        Viewport {
            scale: viewport.scale.max(self.zoom_limits().floor()),
            ..viewport
        }
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            step: self.zoom_step,
            min_scale: self.min_scale,
        }
    }
}
