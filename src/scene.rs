// scene.rs — camera and scene state shared by controllers and projection modes

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Geometry the panorama is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    #[default]
    Sphere,
    Cylinder,
    Plane,
}

/// Accumulated Euler orientation: `x` is pitch, `y` is yaw (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
}

impl Orientation {
    /// Yaw-then-pitch quaternion for this orientation.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.y, self.x, 0.0)
    }
}

/// Rotation axes locked by the active projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionConstraints {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Orientation target written by the active controller.
    pub quaternion: Quat,
}

impl Camera {
    pub fn new(fov: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            fov,
            quaternion: Quat::IDENTITY,
        }
    }

    /// Aim the camera at `point`. A camera sitting on the point keeps its
    /// orientation.
    pub fn look_at(&mut self, point: Vec3) {
        if self.position.distance_squared(point) <= f32::EPSILON {
            return;
        }
        let forward = (point - self.position).normalize();
        let up = if forward.cross(Vec3::Y).length_squared() <= f32::EPSILON {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, point, up);
        self.quaternion = Quat::from_mat4(&view.inverse()).normalize();
    }
}

/// Viewer-level state the control core reads and writes.
#[derive(Debug, Clone)]
pub struct Scene {
    /// `None` until the host has created its camera.
    pub camera: Option<Camera>,
    pub geometry: Geometry,
    /// Rendered viewport height in pixels.
    pub height: u32,
    pub ready: bool,
    pub orientation: Orientation,
    pub constraints: ProjectionConstraints,
}

impl Scene {
    pub fn new(fov: f32, height: u32) -> Self {
        Self {
            camera: Some(Camera::new(fov)),
            geometry: Geometry::Sphere,
            height,
            ready: true,
            orientation: Orientation::default(),
            constraints: ProjectionConstraints::default(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready && self.camera.is_some()
    }

    /// Apply an incremental rotation, skipping locked axes. Pitch is kept
    /// within straight up/down.
    pub fn rotate_by(&mut self, pitch: f32, yaw: f32) {
        if !self.constraints.x {
            self.orientation.x = (self.orientation.x + pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
        }
        if !self.constraints.y {
            self.orientation.y += yaw;
        }
    }

    /// Snap the camera to the accumulated orientation, skipping interpolation.
    pub fn sync_camera(&mut self) {
        let target = self.orientation.to_quat();
        if let Some(camera) = self.camera.as_mut() {
            camera.quaternion = target;
        }
    }

    /// Programmatic rotation from the host: applied at once, with the same
    /// constraints as user input.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        self.rotate_by(pitch, yaw);
        self.sync_camera();
    }

    /// Camera yaw/pitch in degrees, for display.
    pub fn yaw_pitch_degrees(&self) -> Option<(f32, f32)> {
        let camera = self.camera.as_ref()?;
        let (yaw, pitch, _) = camera.quaternion.to_euler(EulerRot::YXZ);
        Some((yaw.to_degrees(), pitch.to_degrees()))
    }
}
