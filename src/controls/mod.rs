// controls/mod.rs — controller contract shared by every input source
//
// Host input events go to `Controller::dispatch`, which routes bound kinds
// to the controller's handler. Once per tick the host calls `advance` (timers)
// on every controller, then `update` on the one controller that currently
// owns the camera.

pub mod movement;
pub mod orientation;
pub mod pointer;
pub mod touch;

pub use movement::MovementController;
pub use orientation::{
    device_orientation_angle, OrientationController, OrientationProvider, OrientationType,
    ScreenOrientation,
};
pub use pointer::{normalize_movements, PointerController};
pub use touch::TouchController;

use crate::config::ControlConfig;
use crate::input::{EventBindings, EventKind, InputEvent};
use crate::scene::Scene;
use glam::Quat;
use std::time::Duration;

/// Incremental rotation for one tick: `x` is pitch, `y` is yaw (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDelta {
    pub x: f32,
    pub y: f32,
}

/// Fields every controller carries.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    pub is_enabled: bool,
    /// Set while a released gesture is still settling.
    pub force_update: bool,
    pub events: EventBindings,
}

impl ControllerState {
    pub fn enabled() -> Self {
        Self {
            is_enabled: true,
            ..Self::default()
        }
    }
}

/// Everything a handler or update may touch during one call.
pub struct ControlContext<'a> {
    pub scene: &'a mut Scene,
    pub config: &'a ControlConfig,
    pub now: Duration,
    /// Touch-controller quaternion to compose with, if touch is active.
    pub touch: Option<Quat>,
}

impl<'a> ControlContext<'a> {
    pub fn new(scene: &'a mut Scene, config: &'a ControlConfig, now: Duration) -> Self {
        Self {
            scene,
            config,
            now,
            touch: None,
        }
    }
}

pub trait Controller {
    fn state(&self) -> &ControllerState;
    fn state_mut(&mut self) -> &mut ControllerState;

    /// Whether this controller has a handler for `kind`.
    fn handles(&self, kind: EventKind) -> bool;

    /// Handler for a bound event kind.
    fn on_event(&mut self, event: &InputEvent, ctx: &mut ControlContext<'_>);

    /// Start listening to `kind`. Binding a kind without a handler is a
    /// programmer error and is ignored in release builds.
    fn bind(&mut self, kind: EventKind) {
        debug_assert!(self.handles(kind), "no handler for {:?}", kind);
        if !self.handles(kind) {
            log::warn!("ignoring binding for unhandled event {:?}", kind);
            return;
        }
        self.state_mut().events.bind(kind);
    }

    fn unbind(&mut self, kind: EventKind) {
        self.state_mut().events.unbind(kind);
    }

    /// Drop every binding; the controller stops receiving events.
    fn teardown(&mut self) {
        self.state_mut().events.unbind_all();
    }

    /// Route `event` to its handler if bound. Returns whether it was handled.
    fn dispatch(&mut self, event: &InputEvent, ctx: &mut ControlContext<'_>) -> bool {
        if !self.state().events.is_bound(event.kind()) {
            return false;
        }
        self.on_event(event, ctx);
        true
    }

    fn enable(&mut self) {
        self.state_mut().is_enabled = true;
    }

    /// Accumulated state is kept; call `reset` before re-enabling to start clean.
    fn disable(&mut self) {
        self.state_mut().is_enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.state().is_enabled
    }

    /// Fire due timers. Runs whether or not the controller is enabled.
    fn advance(&mut self, _now: Duration) {}

    fn update(&mut self, ctx: &mut ControlContext<'_>) {
        update_base(self.state(), ctx);
    }

    fn rotate(&mut self, delta: RotationDelta, ctx: &mut ControlContext<'_>) {
        rotate_base(self.state(), delta, ctx);
    }

    fn reset(&mut self) {
        self.state_mut().force_update = false;
    }

    /// Whether the host should keep producing frames for this controller.
    fn wants_frames(&self) -> bool {
        self.state().force_update
    }
}

/// Base tick: slerp the camera toward the scene's accumulated orientation.
/// Returns whether the camera was written.
pub fn update_base(state: &ControllerState, ctx: &mut ControlContext<'_>) -> bool {
    if !state.is_enabled {
        return false;
    }
    let factor = ctx.config.interpolation_factor();
    let target = ctx.scene.orientation.to_quat();
    let Some(camera) = ctx.scene.camera.as_mut() else {
        return false;
    };
    camera.quaternion = camera.quaternion.slerp(target, factor).normalize();
    true
}

/// Base rotation: add `delta` to the scene orientation, honoring the
/// projection's axis constraints.
pub fn rotate_base(state: &ControllerState, delta: RotationDelta, ctx: &mut ControlContext<'_>) {
    if !state.is_enabled || !delta.x.is_finite() || !delta.y.is_finite() {
        return;
    }
    ctx.scene.rotate_by(delta.x, delta.y);
}

/// Host-side composition of the controllers.
///
/// Pointer drag and touch start enabled; hover-look and the orientation
/// sensor start disabled. Exactly one controller writes the camera per tick:
/// the sensor while enabled (composing the touch quaternion), otherwise an
/// active drag, then an active touch, then hover-look.
pub struct Controls {
    pub pointer: PointerController,
    pub touch: TouchController,
    pub movement: MovementController,
    pub orientation: OrientationController,
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

impl Controls {
    pub fn new() -> Self {
        let mut movement = MovementController::new();
        movement.disable();
        let mut orientation = OrientationController::new();
        orientation.disable();
        Self {
            pointer: PointerController::new(),
            touch: TouchController::new(),
            movement,
            orientation,
        }
    }

    /// Deliver one host event to every controller bound to its kind.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        scene: &mut Scene,
        config: &ControlConfig,
        now: Duration,
    ) {
        let mut ctx = ControlContext::new(scene, config, now);
        self.pointer.dispatch(event, &mut ctx);
        self.touch.dispatch(event, &mut ctx);
        self.movement.dispatch(event, &mut ctx);
        self.orientation.dispatch(event, &mut ctx);
    }

    /// One rendering tick: fire timers, then let the active writer update.
    pub fn tick(&mut self, scene: &mut Scene, config: &ControlConfig, now: Duration) {
        self.pointer.advance(now);
        self.touch.advance(now);
        self.movement.advance(now);
        self.orientation.advance(now);

        let mut ctx = ControlContext::new(scene, config, now);
        if self.orientation.is_enabled() {
            ctx.touch = self.touch.is_enabled().then(|| self.touch.quaternion());
            self.orientation.update(&mut ctx);
        } else if self.pointer.is_dragging() {
            self.pointer.update(&mut ctx);
        } else if self.touch.is_touching() {
            self.touch.update(&mut ctx);
        } else {
            self.movement.update(&mut ctx);
        }
    }

    pub fn reset(&mut self) {
        self.pointer.reset();
        self.touch.reset();
        self.movement.reset();
        self.orientation.reset();
    }

    pub fn wants_frames(&self) -> bool {
        self.pointer.is_dragging()
            || self.touch.is_touching()
            || self.pointer.wants_frames()
            || self.touch.wants_frames()
            || self.movement.is_enabled()
    }
}
