// projection/equirectangular.rs — neutral projection, restores the configured view

use super::{scene_is_usable, ProjectionContext, ProjectionMode};
use crate::scene::{ProjectionConstraints, Scene};
use crate::scheduler::AnimationHandle;
use glam::Vec3;

/// Return to the original field of view with the camera at the centre.
/// Works on every geometry.
pub fn equirectangular(ctx: &mut ProjectionContext<'_>) -> Option<AnimationHandle> {
    if !scene_is_usable(ctx.scene, ProjectionMode::Equirectangular) {
        return None;
    }

    if let Some(camera) = ctx.scene.camera.as_mut() {
        camera.fov = ctx.config.original_fov;
    }
    ctx.scene.constraints = ProjectionConstraints::default();

    log::debug!("animate: EQUIRECTANGULAR begin");
    Some(ctx.scheduler.animate(|scene: &mut Scene, animation| {
        if let Some(camera) = scene.camera.as_mut() {
            camera.position = Vec3::ZERO;
        }
        animation.cancel();
    }))
}
