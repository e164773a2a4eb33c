// config.rs — scope-level control configuration
//
// Loaded once from JSON and treated as read-only by the controllers.
// Lookup order:
// - CLI: --config <path>
// - Env: PANORAMA_CONFIG
// - <exe_dir>/assets/controls.json
// - ./assets/controls.json
// - built-in defaults

use crate::error::{ControlError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FRICTION: f32 = 0.0032;
pub const DEFAULT_MOUSE_MOVEMENT_FRICTION: f32 = 0.05;
pub const DEFAULT_INTERPOLATION_FACTOR: f32 = 0.1;
pub const DEFAULT_CONTROLLER_UPDATE_TIMEOUT_MS: u64 = 600;
pub const DEFAULT_FOV: f32 = 90.0;

const CONFIG_FILE: &str = "controls.json";
const CONFIG_ENV: &str = "PANORAMA_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Global friction coefficient.
    pub friction: f32,
    /// Pointer drag friction; `None` uses [`DEFAULT_MOUSE_MOVEMENT_FRICTION`].
    pub mouse_friction: Option<f32>,
    /// Touch swipe friction; `None` uses `friction`.
    pub touch_friction: Option<f32>,
    /// Slerp factor in (0, 1]. Closer to 1 is snappier.
    pub interpolation_factor: f32,
    /// Delay before a released drag decays back to idle.
    pub update_timeout_ms: u64,
    /// Field of view (degrees) the viewer was configured with.
    pub original_fov: f32,
    /// Pointer movement normalization factor.
    pub movement_scale: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            mouse_friction: None,
            touch_friction: None,
            interpolation_factor: DEFAULT_INTERPOLATION_FACTOR,
            update_timeout_ms: DEFAULT_CONTROLLER_UPDATE_TIMEOUT_MS,
            original_fov: DEFAULT_FOV,
            movement_scale: 1.0,
        }
    }
}

impl ControlConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| ControlError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ControlError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Resolve the config from CLI/env/asset locations, falling back to
    /// defaults when no file is found. An explicitly requested file that
    /// fails to load is an error; a discovered one is only warned about.
    pub fn resolve() -> Result<Self> {
        if let Some(path) = explicit_config_path() {
            log::info!("loading controls config from {:?}", path);
            return Self::load(&path);
        }

        if let Some(path) = find_config_file() {
            match Self::load(&path) {
                Ok(config) => {
                    log::info!("loaded controls config from {:?}", path);
                    return Ok(config);
                }
                Err(e) => log::warn!("ignoring config: {}", e),
            }
        }

        log::info!("using default controls config");
        Ok(Self::default())
    }

    pub fn mouse_friction(&self) -> f32 {
        positive_or(self.mouse_friction, DEFAULT_MOUSE_MOVEMENT_FRICTION)
    }

    pub fn touch_friction(&self) -> f32 {
        positive_or(self.touch_friction, self.friction)
    }

    /// Interpolation factor clamped into (0, 1].
    pub fn interpolation_factor(&self) -> f32 {
        if self.interpolation_factor.is_finite() && self.interpolation_factor > 0.0 {
            self.interpolation_factor.min(1.0)
        } else {
            DEFAULT_INTERPOLATION_FACTOR
        }
    }

    pub fn update_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_timeout_ms)
    }
}

// A zero friction would freeze input entirely, so it falls back like an unset value.
fn positive_or(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => fallback,
    }
}

fn explicit_config_path() -> Option<PathBuf> {
    let mut it = std::env::args();
    while let Some(a) = it.next() {
        if a == "--config" {
            if let Some(v) = it.next() {
                return Some(PathBuf::from(v));
            }
        }
    }

    match std::env::var(CONFIG_ENV) {
        Ok(v) if !v.trim().is_empty() => Some(PathBuf::from(v)),
        _ => None,
    }
}

/// Find assets/controls.json by searching:
/// 1) <exe_dir>/assets/controls.json
/// 2) ./assets/controls.json  (dev working dir)
fn find_config_file() -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let p = dir.join("assets").join(CONFIG_FILE);
            if p.exists() {
                return Some(p);
            }
        }
    }

    let p = PathBuf::from("assets").join(CONFIG_FILE);
    if p.exists() {
        return Some(p);
    }

    None
}
