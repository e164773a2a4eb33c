// projection/mod.rs — projection modes and the registry that sequences them
//
// A mode validates the scene, sets camera parameters and constraints, then
// installs one animation on the scheduler which finishes the switch and
// cancels itself. A rejected request changes nothing.

mod equirectangular;
mod fisheye;
mod tiny_planet;

pub use equirectangular::equirectangular;
pub use fisheye::{fisheye, fisheye_constraints, FISHEYE_FOV_OFFSET};
pub use tiny_planet::{tiny_planet, TINY_PLANET_FOV_OFFSET};

use crate::config::ControlConfig;
use crate::scene::Scene;
use crate::scheduler::{AnimationHandle, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Equirectangular, // neutral: original FOV, camera at the centre
    Fisheye,    // wider FOV, camera pushed back
    TinyPlanet, // very wide FOV, looking straight down
}

impl ProjectionMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Equirectangular => "equirectangular",
            Self::Fisheye => "fisheye",
            Self::TinyPlanet => "tinyplanet",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "equirectangular" | "equilinear" => Some(Self::Equirectangular),
            "fisheye" => Some(Self::Fisheye),
            "tinyplanet" | "tiny-planet" => Some(Self::TinyPlanet),
            _ => None,
        }
    }

    fn function(self) -> fn(&mut ProjectionContext<'_>) -> Option<AnimationHandle> {
        match self {
            Self::Equirectangular => equirectangular,
            Self::Fisheye => fisheye,
            Self::TinyPlanet => tiny_planet,
        }
    }
}

/// What a projection function gets to work with.
pub struct ProjectionContext<'a> {
    pub scene: &'a mut Scene,
    pub scheduler: &'a mut Scheduler<Scene>,
    pub config: &'a ControlConfig,
    /// Mode active before this request.
    pub current: ProjectionMode,
}

/// Tracks the active mode and its in-flight animation.
#[derive(Debug, Default)]
pub struct Projections {
    current: ProjectionMode,
    animation: Option<AnimationHandle>,
}

impl Projections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ProjectionMode {
        self.current
    }

    /// Request a switch to `mode`. Returns `false` when the mode rejects the
    /// current scene; the caller must re-request once the scene changes.
    pub fn apply(
        &mut self,
        mode: ProjectionMode,
        scene: &mut Scene,
        scheduler: &mut Scheduler<Scene>,
        config: &ControlConfig,
    ) -> bool {
        let mut ctx = ProjectionContext {
            scene,
            scheduler: &mut *scheduler,
            config,
            current: self.current,
        };
        let Some(handle) = (mode.function())(&mut ctx) else {
            log::debug!("projection {} rejected", mode.name());
            return false;
        };

        // only one mode may drive the camera at a time
        if let Some(previous) = self.animation.replace(handle) {
            scheduler.cancel(previous);
        }
        self.current = mode;
        true
    }

    /// Stop the in-flight animation, if any, leaving the mode as is.
    pub fn cancel(&mut self, scheduler: &mut Scheduler<Scene>) {
        if let Some(handle) = self.animation.take() {
            scheduler.cancel(handle);
        }
    }
}

/// Shared preconditions: a camera exists and the viewer is ready.
fn scene_is_usable(scene: &Scene, mode: ProjectionMode) -> bool {
    if scene.camera.is_none() {
        log::debug!("{}: camera not initialized", mode.name());
        return false;
    }
    if !scene.ready {
        log::debug!("{}: viewer not ready", mode.name());
        return false;
    }
    true
}

/// Camera depth used by the wide-angle modes.
fn max_z(scene: &Scene) -> f32 {
    (scene.height / 100) as f32
}
