// controls/touch.rs — touch swipes to rotation and the touch quaternion

use super::{ControlContext, Controller, ControllerState, RotationDelta};
use crate::input::{EventKind, InputEvent};
use glam::{Quat, Vec2};

const BOUND_EVENTS: [EventKind; 3] = [EventKind::TouchStart, EventKind::TouchMove, EventKind::TouchEnd];

/// Swipes rotate the scene like a pointer drag and also accumulate a
/// yaw-only quaternion the orientation sensor composes with, so a user can
/// re-aim the view while holding the device.
#[derive(Debug)]
pub struct TouchController {
    state: ControllerState,
    touch_start: Vec2,
    is_touching: bool,
    /// Accumulated swipe yaw (radians).
    yaw: f32,
}

impl Default for TouchController {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: ControllerState::enabled(),
            touch_start: Vec2::ZERO,
            is_touching: false,
            yaw: 0.0,
        };
        for kind in BOUND_EVENTS {
            controller.bind(kind);
        }
        controller
    }

    pub fn is_touching(&self) -> bool {
        self.is_touching
    }

    pub fn quaternion(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    fn on_touch_start(&mut self, x: f32, y: f32, ctx: &mut ControlContext<'_>) {
        self.state.force_update = false;
        self.is_touching = true;
        self.touch_start = Vec2::new(x, y) * ctx.config.touch_friction();
    }

    fn on_touch_move(&mut self, x: f32, y: f32, ctx: &mut ControlContext<'_>) {
        if !self.state.is_enabled || !self.is_touching {
            return;
        }
        let current = Vec2::new(x, y) * ctx.config.touch_friction();
        let delta = current - self.touch_start;
        if !delta.is_finite() {
            return;
        }
        self.yaw += delta.x;
        self.rotate(RotationDelta { x: delta.y, y: delta.x }, ctx);
        self.touch_start = current;
    }

    fn on_touch_end(&mut self) {
        self.is_touching = false;
    }
}

impl Controller for TouchController {
    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    fn handles(&self, kind: EventKind) -> bool {
        BOUND_EVENTS.contains(&kind)
    }

    fn on_event(&mut self, event: &InputEvent, ctx: &mut ControlContext<'_>) {
        match *event {
            InputEvent::TouchStart { x, y } => self.on_touch_start(x, y, ctx),
            InputEvent::TouchMove { x, y } => self.on_touch_move(x, y, ctx),
            InputEvent::TouchEnd => self.on_touch_end(),
            _ => {}
        }
    }

    fn update(&mut self, ctx: &mut ControlContext<'_>) {
        if !self.is_touching {
            return;
        }
        super::update_base(&self.state, ctx);
    }

    fn reset(&mut self) {
        self.state.force_update = false;
        self.is_touching = false;
        self.touch_start = Vec2::ZERO;
        self.yaw = 0.0;
    }
}
