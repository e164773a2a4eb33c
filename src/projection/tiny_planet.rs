// projection/tiny_planet.rs — stereographic "little planet" view

use super::{max_z, scene_is_usable, ProjectionContext, ProjectionMode};
use crate::scene::{Geometry, ProjectionConstraints, Scene};
use crate::scheduler::AnimationHandle;
use std::f32::consts::FRAC_PI_2;

pub const TINY_PLANET_FOV_OFFSET: f32 = 60.0;
const MAX_FOV: f32 = 179.0;

pub fn tiny_planet(ctx: &mut ProjectionContext<'_>) -> Option<AnimationHandle> {
    if !scene_is_usable(ctx.scene, ProjectionMode::TinyPlanet) {
        return None;
    }
    if ctx.scene.geometry != Geometry::Sphere {
        log::debug!("tinyplanet: {:?} geometry not supported", ctx.scene.geometry);
        return None;
    }

    let max_z = max_z(ctx.scene);
    if let Some(camera) = ctx.scene.camera.as_mut() {
        camera.fov = (ctx.config.original_fov + TINY_PLANET_FOV_OFFSET).min(MAX_FOV);
    }
    ctx.scene.constraints = ProjectionConstraints::default();

    log::debug!("animate: TINYPLANET begin");
    Some(ctx.scheduler.animate(move |scene: &mut Scene, animation| {
        if let Some(camera) = scene.camera.as_mut() {
            camera.position.z = max_z;
        }
        scene.orientation.x = -FRAC_PI_2;
        scene.sync_camera();
        animation.cancel();
    }))
}
