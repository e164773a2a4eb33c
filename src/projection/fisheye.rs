// projection/fisheye.rs — fisheye projection (spherical geometry only)

use super::{max_z, scene_is_usable, ProjectionContext, ProjectionMode};
use crate::scene::{Geometry, ProjectionConstraints, Scene};
use crate::scheduler::AnimationHandle;
use glam::Vec3;
use std::f32::consts::PI;

/// Degrees added to the originally configured field of view.
pub const FISHEYE_FOV_OFFSET: f32 = 20.0;

/// Axis constraints for fisheye on `geometry`. Spheres are unconstrained;
/// anything else has pitch zeroed by the caller and yaw locked.
pub fn fisheye_constraints(geometry: Geometry) -> ProjectionConstraints {
    match geometry {
        Geometry::Sphere => ProjectionConstraints::default(),
        Geometry::Cylinder | Geometry::Plane => ProjectionConstraints { x: false, y: true },
    }
}

/// Apply the fisheye projection. Returns the installed animation, or `None`
/// if the scene cannot show it.
pub fn fisheye(ctx: &mut ProjectionContext<'_>) -> Option<AnimationHandle> {
    if !scene_is_usable(ctx.scene, ProjectionMode::Fisheye) {
        return None;
    }
    if ctx.scene.geometry == Geometry::Cylinder {
        log::debug!("fisheye: cylinder geometry not supported");
        return None;
    }

    let max_z = max_z(ctx.scene);
    let current = ctx.current;

    if let Some(camera) = ctx.scene.camera.as_mut() {
        camera.fov = ctx.config.original_fov + FISHEYE_FOV_OFFSET;
    }

    ctx.scene.constraints = fisheye_constraints(ctx.scene.geometry);
    let level = ctx.scene.geometry != Geometry::Sphere;
    if level {
        ctx.scene.orientation.x = 0.0;
    }

    log::debug!("animate: FISHEYE begin");
    Some(ctx.scheduler.animate(move |scene: &mut Scene, animation| {
        if let Some(camera) = scene.camera.as_mut() {
            camera.position.z = max_z;
        }

        match current {
            ProjectionMode::TinyPlanet => {
                scene.orientation.x = 0.0;
                if let Some(camera) = scene.camera.as_mut() {
                    camera.look_at(Vec3::ZERO);
                }
            }
            ProjectionMode::Equirectangular => {
                if level {
                    scene.sync_camera();
                }
            }
            ProjectionMode::Fisheye => {
                scene.orientation.x = PI / 180.0;
                scene.sync_camera();
            }
        }

        animation.cancel();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfig;
    use crate::scheduler::Scheduler;
    use glam::Quat;

    fn run(scene: &mut Scene, current: ProjectionMode) -> (Option<AnimationHandle>, Scheduler<Scene>) {
        let mut scheduler = Scheduler::new();
        let config = ControlConfig {
            original_fov: 75.0,
            ..ControlConfig::default()
        };
        let handle = fisheye(&mut ProjectionContext {
            scene,
            scheduler: &mut scheduler,
            config: &config,
            current,
        });
        (handle, scheduler)
    }

    #[test]
    fn cylinder_is_rejected_without_touching_fov() {
        let mut scene = Scene::new(60.0, 720);
        scene.geometry = Geometry::Cylinder;
        let (handle, scheduler) = run(&mut scene, ProjectionMode::Equirectangular);
        assert!(handle.is_none());
        assert!(scheduler.is_empty());
        assert_eq!(scene.camera.as_ref().unwrap().fov, 60.0);
    }

    #[test]
    fn requires_camera_and_readiness() {
        let mut scene = Scene::new(60.0, 720);
        scene.ready = false;
        assert!(run(&mut scene, ProjectionMode::Equirectangular).0.is_none());

        scene.ready = true;
        scene.camera = None;
        assert!(run(&mut scene, ProjectionMode::Equirectangular).0.is_none());
    }

    #[test]
    fn widens_fov_and_pins_depth_in_one_tick() {
        let mut scene = Scene::new(60.0, 799);
        scene.constraints = ProjectionConstraints { x: true, y: true };
        let (handle, mut scheduler) = run(&mut scene, ProjectionMode::Equirectangular);
        let handle = handle.unwrap();

        assert_eq!(scene.camera.as_ref().unwrap().fov, 95.0);
        assert_eq!(scene.constraints, ProjectionConstraints::default());

        scheduler.tick(&mut scene);
        assert_eq!(scene.camera.as_ref().unwrap().position.z, 7.0);
        assert_eq!(scene.orientation.x, 0.0);
        assert!(!scheduler.is_active(handle));
    }

    #[test]
    fn from_tiny_planet_levels_and_aims_at_origin() {
        let mut scene = Scene::new(60.0, 500);
        scene.orientation.x = -1.2;
        scene.camera.as_mut().unwrap().quaternion = Quat::from_rotation_x(-1.2);
        let (_, mut scheduler) = run(&mut scene, ProjectionMode::TinyPlanet);
        scheduler.tick(&mut scene);

        assert_eq!(scene.orientation.x, 0.0);
        assert!(scene.camera.as_ref().unwrap().quaternion.abs_diff_eq(Quat::IDENTITY, 1e-5));
    }

    #[test]
    fn from_other_modes_sets_small_pitch() {
        let mut scene = Scene::new(60.0, 500);
        let (_, mut scheduler) = run(&mut scene, ProjectionMode::Fisheye);
        scheduler.tick(&mut scene);
        assert_eq!(scene.orientation.x, PI / 180.0);
        let q = scene.camera.as_ref().unwrap().quaternion;
        assert!(q.abs_diff_eq(Quat::from_rotation_x(PI / 180.0), 1e-6));
    }

    #[test]
    fn plane_locks_yaw_and_levels_pitch() {
        let mut scene = Scene::new(60.0, 500);
        scene.geometry = Geometry::Plane;
        scene.orientation.x = 0.4;
        scene.camera.as_mut().unwrap().quaternion = Quat::from_rotation_x(0.4);
        let (handle, mut scheduler) = run(&mut scene, ProjectionMode::Equirectangular);
        assert!(handle.is_some());
        assert_eq!(scene.constraints, ProjectionConstraints { x: false, y: true });
        assert_eq!(scene.orientation.x, 0.0);

        scheduler.tick(&mut scene);
        assert_eq!(scene.camera.as_ref().unwrap().quaternion, Quat::IDENTITY);
    }
}
