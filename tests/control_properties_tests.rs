use glam::{Quat, Vec2};
use panorama_controls::controls::RotationDelta;
use panorama_controls::{
    Clock, ControlConfig, Controller, Controls, DeviceOrientationEvent, Geometry, InputEvent,
    ManualClock, Orientation, ProjectionMode, Projections, Scene, Scheduler,
};
use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

struct Harness {
    clock: ManualClock,
    config: ControlConfig,
    scene: Scene,
    controls: Controls,
}

impl Harness {
    fn new() -> Self {
        Self {
            clock: ManualClock::new(),
            config: ControlConfig {
                mouse_friction: Some(0.5),
                update_timeout_ms: 600,
                ..ControlConfig::default()
            },
            scene: Scene::new(90.0, 720),
            controls: Controls::new(),
        }
    }

    fn send(&mut self, event: InputEvent) {
        let now = self.clock.now();
        self.controls.handle_event(&event, &mut self.scene, &self.config, now);
    }

    fn tick(&mut self) {
        let now = self.clock.now();
        self.controls.tick(&mut self.scene, &self.config, now);
    }

    fn advance_ms(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.tick();
    }

    fn camera(&self) -> Quat {
        self.scene.camera.as_ref().unwrap().quaternion
    }
}

// ============================================================================
// Pointer drag
// ============================================================================

#[test]
fn test_disabled_pointer_never_moves_camera() {
    let mut h = Harness::new();
    h.controls.pointer.disable();
    h.controls.touch.disable();

    h.send(InputEvent::PointerDown { x: 10.0, y: 10.0 });
    for i in 0..20 {
        h.send(InputEvent::PointerMove {
            x: 10.0 + i as f32 * 7.0,
            y: 10.0 - i as f32 * 3.0,
        });
        h.tick();
    }
    h.send(InputEvent::PointerUp);
    h.advance_ms(1000);

    assert_eq!(h.camera(), Quat::IDENTITY);
    assert_eq!(h.scene.orientation, Orientation::default());
}

#[test]
fn test_press_release_schedules_single_decay() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerDown { x: 4.0, y: 4.0 });
    h.send(InputEvent::PointerUp);

    assert_eq!(h.controls.pointer.decay_deadline(), Some(Duration::from_millis(600)));
    assert!(h.controls.wants_frames());

    h.advance_ms(600);
    assert_eq!(h.controls.pointer.decay_deadline(), None);
    assert!(!h.controls.wants_frames());
    assert_eq!(h.controls.pointer.movements_start(), Vec2::ZERO);
}

#[test]
fn test_second_press_cancels_first_decay() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerDown { x: 4.0, y: 4.0 });
    h.send(InputEvent::PointerUp);

    h.advance_ms(300);
    h.send(InputEvent::PointerDown { x: 20.0, y: 30.0 });

    // past the first timer's deadline: drag start must survive
    h.advance_ms(400);
    assert_eq!(h.controls.pointer.movements_start(), Vec2::new(10.0, 15.0));
    assert!(h.controls.pointer.is_dragging());
    assert_eq!(h.controls.pointer.decay_deadline(), None);
}

#[test]
fn test_repeated_identical_moves_yield_zero_delta() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    h.send(InputEvent::PointerMove { x: 8.0, y: 4.0 });
    let after_first = h.scene.orientation;
    assert_ne!(h.controls.pointer.movements(), RotationDelta::default());

    for _ in 0..5 {
        h.send(InputEvent::PointerMove { x: 8.0, y: 4.0 });
        assert_eq!(h.controls.pointer.movements(), RotationDelta::default());
    }
    assert_eq!(h.scene.orientation, after_first);
}

#[test]
fn test_drag_converges_camera_toward_scene_orientation() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    h.send(InputEvent::PointerMove { x: 40.0, y: 0.0 });
    let target = h.scene.orientation.to_quat();
    assert_ne!(target, Quat::IDENTITY);

    for _ in 0..200 {
        h.tick();
    }
    assert!(h.camera().dot(target).abs() > 1.0 - 1e-4);
}

#[test]
fn test_pointer_and_touch_together_interpolate_once_per_tick() {
    let mut h = Harness::new();
    h.config.interpolation_factor = 0.5;
    h.scene.orientation.y = 1.0;

    h.send(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    h.send(InputEvent::TouchStart { x: 0.0, y: 0.0 });
    assert!(h.controls.pointer.is_dragging());
    assert!(h.controls.touch.is_touching());

    h.tick();
    let expected = Quat::IDENTITY.slerp(Quat::from_rotation_y(1.0), 0.5);
    assert!(h.camera().abs_diff_eq(expected, 1e-5));
    assert!(h.camera().abs_diff_eq(Quat::from_rotation_y(0.5), 1e-5));
}

// ============================================================================
// Hover-look
// ============================================================================

#[test]
fn test_hover_look_follows_pointer_without_press() {
    let mut h = Harness::new();
    h.config.interpolation_factor = 1.0;
    h.controls.pointer.disable();
    h.controls.movement.enable();
    assert!(h.controls.wants_frames());

    h.send(InputEvent::PointerMove { x: 0.0, y: 0.0 });
    h.send(InputEvent::PointerMove { x: 40.0, y: 0.0 });
    h.tick();

    // 40 * 0.5 friction, then * 0.5 again on the yaw axis
    assert_eq!(h.scene.orientation, Orientation { x: 0.0, y: 10.0 });
    assert!(h.camera().abs_diff_eq(h.scene.orientation.to_quat(), 1e-5));
}

#[test]
fn test_hover_look_is_off_by_default() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerMove { x: 0.0, y: 0.0 });
    h.send(InputEvent::PointerMove { x: 40.0, y: 40.0 });
    h.tick();
    assert_eq!(h.scene.orientation, Orientation::default());
    assert_eq!(h.camera(), Quat::IDENTITY);
}

// ============================================================================
// Orientation sensor
// ============================================================================

fn reading(alpha: f32, beta: f32, gamma: f32) -> InputEvent {
    InputEvent::DeviceOrientation(DeviceOrientationEvent {
        alpha: Some(alpha),
        beta: Some(beta),
        gamma: Some(gamma),
    })
}

#[test]
fn test_sensor_boundary_readings() {
    let mut h = Harness::new();
    h.controls.orientation.enable();

    h.send(reading(0.0, 1.0, 1.0));
    h.tick();
    assert_eq!(h.camera(), Quat::IDENTITY);

    h.send(reading(0.0001, 1.0, 1.0));
    h.tick();
    assert_ne!(h.camera(), Quat::IDENTITY);
}

#[test]
fn test_sensor_composes_touch_quaternion() {
    let mut h = Harness::new();
    h.config.interpolation_factor = 1.0;
    h.config.touch_friction = Some(0.5);
    h.controls.orientation.enable();

    h.send(InputEvent::TouchStart { x: 0.0, y: 0.0 });
    h.send(InputEvent::TouchMove { x: 1.0, y: 0.0 });
    h.send(InputEvent::TouchEnd);
    h.send(reading(30.0, 20.0, 10.0));
    h.tick();

    let sensor = h.controls.orientation.direction().unwrap();
    let expected = sensor * Quat::from_rotation_y(0.5);
    assert!(h.camera().abs_diff_eq(expected, 1e-5));
}

// ============================================================================
// Projection modes
// ============================================================================

#[test]
fn test_fisheye_on_cylinder_is_rejected() {
    let mut scene = Scene::new(75.0, 720);
    scene.geometry = Geometry::Cylinder;
    let mut scheduler = Scheduler::new();
    let mut projections = Projections::new();
    let config = ControlConfig::default();

    assert!(!projections.apply(ProjectionMode::Fisheye, &mut scene, &mut scheduler, &config));
    assert_eq!(scene.camera.as_ref().unwrap().fov, 75.0);
    assert!(scheduler.is_empty());
}

#[test]
fn test_fisheye_settles_after_single_tick() {
    let mut scene = Scene::new(75.0, 900);
    let mut scheduler = Scheduler::new();
    let mut projections = Projections::new();
    let config = ControlConfig::default();

    assert!(projections.apply(ProjectionMode::Fisheye, &mut scene, &mut scheduler, &config));
    assert_eq!(scene.camera.as_ref().unwrap().fov, config.original_fov + 20.0);

    scheduler.tick(&mut scene);
    assert!(scheduler.is_empty());
    assert_eq!(scene.camera.as_ref().unwrap().position.z, 9.0);

    // nothing else happens on later ticks
    scene.camera.as_mut().unwrap().position.z = 0.0;
    scheduler.tick(&mut scene);
    assert_eq!(scene.camera.as_ref().unwrap().position.z, 0.0);
}

#[test]
fn test_projection_pitch_reaches_camera_without_input() {
    let mut h = Harness::new();
    let mut scheduler = Scheduler::new();
    let mut projections = Projections::new();

    assert!(projections.apply(ProjectionMode::TinyPlanet, &mut h.scene, &mut scheduler, &h.config));
    for _ in 0..200 {
        h.tick();
        scheduler.tick(&mut h.scene);
    }

    assert_eq!(h.scene.orientation.x, -FRAC_PI_2);
    assert!(h.camera().abs_diff_eq(Quat::from_rotation_x(-FRAC_PI_2), 1e-5));
}

#[test]
fn test_host_rotate_applies_immediately() {
    let mut h = Harness::new();
    h.scene.rotate(-0.04, 0.0);
    assert!(h.camera().abs_diff_eq(Quat::from_rotation_x(-0.04), 1e-6));

    // a later drag continues from the rotated orientation
    h.send(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    h.send(InputEvent::PointerMove { x: 0.0, y: 8.0 });
    assert!((h.scene.orientation.x - (-0.04 + 1.0)).abs() < 1e-6);
}

#[test]
fn test_reset_is_safe_mid_gesture() {
    let mut h = Harness::new();
    h.send(InputEvent::PointerDown { x: 1.0, y: 1.0 });
    h.send(InputEvent::PointerMove { x: 5.0, y: 5.0 });
    h.send(InputEvent::TouchStart { x: 1.0, y: 1.0 });
    h.controls.reset();

    assert!(!h.controls.wants_frames());
    h.send(InputEvent::PointerMove { x: 50.0, y: 50.0 });
    assert_eq!(h.controls.pointer.movements(), RotationDelta::default());
}
