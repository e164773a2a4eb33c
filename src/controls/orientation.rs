// controls/orientation.rs — device-orientation sensor to camera quaternion

use super::{ControlContext, Controller, ControllerState};
use crate::input::{DeviceOrientationEvent, EventKind, InputEvent};
use glam::{EulerRot, Quat};

/// Screen orientation type as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationType {
    LandscapePrimary,
    LandscapeSecondary,
    PortraitPrimary,
    PortraitSecondary,
}

impl OrientationType {
    /// Parse a platform type string such as `"landscape-primary"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "landscape-primary" => Some(Self::LandscapePrimary),
            "landscape-secondary" => Some(Self::LandscapeSecondary),
            "portrait-primary" => Some(Self::PortraitPrimary),
            "portrait-secondary" => Some(Self::PortraitSecondary),
            _ => None,
        }
    }

    /// Angle implied by the type when the platform reports none.
    pub fn canonical_angle(self) -> f32 {
        match self {
            Self::LandscapePrimary => 90.0,
            Self::LandscapeSecondary => -90.0,
            Self::PortraitSecondary => 180.0,
            Self::PortraitPrimary => 0.0,
        }
    }
}

/// Screen orientation object from one platform API.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenOrientation {
    pub kind: Option<OrientationType>,
    /// Degrees. `None`, zero and NaN all count as "not reported".
    pub angle: Option<f32>,
}

/// One platform orientation API. Providers are queried in order and the
/// first that answers wins.
pub type OrientationProvider = Box<dyn Fn() -> Option<ScreenOrientation>>;

type LegacyOrientation = Box<dyn Fn() -> Option<f32>>;

fn reported(angle: Option<f32>) -> Option<f32> {
    angle.filter(|a| a.is_finite() && *a != 0.0)
}

/// Current screen rotation in degrees.
///
/// A reported angle always wins. Otherwise a known type maps to its
/// canonical angle; an unknown or missing type falls back to the legacy
/// single-value reading, then `0`.
pub fn device_orientation_angle(orientation: Option<&ScreenOrientation>, legacy: Option<f32>) -> f32 {
    let kind = orientation.and_then(|o| o.kind);
    if let Some(angle) = reported(orientation.and_then(|o| o.angle)) {
        return angle;
    }
    match kind {
        Some(kind) => kind.canonical_angle(),
        None => reported(legacy).unwrap_or(0.0),
    }
}

/// Degrees to radians; anything that isn't a finite number becomes `0`.
fn dtor(degrees: Option<f32>) -> f32 {
    match degrees {
        Some(d) if d.is_finite() => d.to_radians(),
        _ => 0.0,
    }
}

pub struct OrientationController {
    state: ControllerState,
    alpha: Option<f32>,
    beta: Option<f32>,
    gamma: Option<f32>,
    providers: Vec<OrientationProvider>,
    legacy: Option<LegacyOrientation>,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: ControllerState::enabled(),
            alpha: Some(0.0),
            beta: Some(0.0),
            gamma: Some(0.0),
            providers: Vec::new(),
            legacy: None,
        };
        controller.bind(EventKind::DeviceOrientation);
        controller
    }

    /// Append an orientation API to the lookup order. Register a host
    /// override first, then platform APIs by preference.
    pub fn with_provider(mut self, provider: OrientationProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Legacy single-value orientation reading, consulted last.
    pub fn with_legacy_orientation(mut self, legacy: impl Fn() -> Option<f32> + 'static) -> Self {
        self.legacy = Some(Box::new(legacy));
        self
    }

    /// Screen rotation in degrees, recomputed on every call.
    pub fn device_orientation_angle(&self) -> f32 {
        let orientation = self.providers.iter().find_map(|provider| provider());
        let legacy = self.legacy.as_ref().and_then(|legacy| legacy());
        device_orientation_angle(orientation.as_ref(), legacy)
    }

    /// Raw sensor angles in degrees (alpha, beta, gamma).
    pub fn angles(&self) -> (Option<f32>, Option<f32>, Option<f32>) {
        (self.alpha, self.beta, self.gamma)
    }

    fn on_device_orientation(&mut self, event: &DeviceOrientationEvent) {
        self.alpha = event.alpha;
        self.beta = event.beta;
        self.gamma = event.gamma;
    }

    /// Sensor quaternion for the current reading, or `None` when any angle
    /// is zero (uncalibrated or partial data).
    pub fn direction(&self) -> Option<Quat> {
        let alpha = dtor(self.alpha);
        let beta = dtor(self.beta);
        let gamma = dtor(self.gamma);
        if alpha == 0.0 || beta == 0.0 || gamma == 0.0 {
            return None;
        }
        Some(Quat::from_euler(EulerRot::YXZ, alpha, beta, -gamma))
    }
}

impl Controller for OrientationController {
    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    fn handles(&self, kind: EventKind) -> bool {
        kind == EventKind::DeviceOrientation
    }

    fn on_event(&mut self, event: &InputEvent, _ctx: &mut ControlContext<'_>) {
        if let InputEvent::DeviceOrientation(e) = event {
            self.on_device_orientation(e);
        }
    }

    fn update(&mut self, ctx: &mut ControlContext<'_>) {
        if !self.state.is_enabled {
            return;
        }
        let Some(mut direction) = self.direction() else {
            return;
        };
        if let Some(touch) = ctx.touch {
            direction = direction * touch;
        }
        let factor = ctx.config.interpolation_factor();
        if let Some(camera) = ctx.scene.camera.as_mut() {
            camera.quaternion = camera.quaternion.slerp(direction, factor).normalize();
        }
    }

    fn reset(&mut self) {
        self.state.force_update = false;
        self.alpha = Some(0.0);
        self.beta = Some(0.0);
        self.gamma = Some(0.0);
    }
}
