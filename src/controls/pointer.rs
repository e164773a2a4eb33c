// controls/pointer.rs — pointer drag to rotation, with friction and release decay
//
// idle -> dragging (pointer down) -> decaying (pointer up/leave) -> idle (timeout)

use super::{ControlContext, Controller, ControllerState, RotationDelta};
use crate::input::{EventKind, InputEvent};
use crate::timer::Timeout;
use glam::Vec2;
use std::time::Duration;

const BOUND_EVENTS: [EventKind; 4] = [
    EventKind::PointerLeave,
    EventKind::PointerDown,
    EventKind::PointerMove,
    EventKind::PointerUp,
];

/// Scale raw pointer movement into the host's canonical units. Non-finite
/// components are dropped.
pub fn normalize_movements(movements: &mut RotationDelta, scale: f32) {
    let scale = if scale.is_finite() { scale } else { 1.0 };
    movements.x = if movements.x.is_finite() { movements.x * scale } else { 0.0 };
    movements.y = if movements.y.is_finite() { movements.y * scale } else { 0.0 };
}

#[derive(Debug)]
pub struct PointerController {
    state: ControllerState,
    /// Delta computed by the last move, in rotation space (x pitch, y yaw).
    movements: RotationDelta,
    /// Friction-scaled screen position of the previous sample.
    movements_start: Vec2,
    is_mousedown: bool,
    decay: Timeout,
}

impl Default for PointerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: ControllerState::enabled(),
            movements: RotationDelta::default(),
            movements_start: Vec2::ZERO,
            is_mousedown: false,
            decay: Timeout::default(),
        };
        for kind in BOUND_EVENTS {
            controller.bind(kind);
        }
        controller
    }

    pub fn is_dragging(&self) -> bool {
        self.is_mousedown
    }

    pub fn movements(&self) -> RotationDelta {
        self.movements
    }

    pub fn movements_start(&self) -> Vec2 {
        self.movements_start
    }

    /// Deadline of the pending decay, if any.
    pub fn decay_deadline(&self) -> Option<Duration> {
        self.decay.deadline()
    }

    fn on_pointer_down(&mut self, x: f32, y: f32, ctx: &mut ControlContext<'_>) {
        let friction = ctx.config.mouse_friction();
        self.decay.cancel();
        self.state.force_update = false;
        self.is_mousedown = true;
        self.movements_start = Vec2::new(x, y) * friction;
    }

    fn on_pointer_up(&mut self, ctx: &mut ControlContext<'_>) {
        self.state.force_update = true;
        self.is_mousedown = false;
        self.decay.start(ctx.now, ctx.config.update_timeout());
    }

    fn on_pointer_move(&mut self, x: f32, y: f32, ctx: &mut ControlContext<'_>) {
        if !self.state.is_enabled || !self.is_mousedown {
            return;
        }
        let friction = ctx.config.mouse_friction();
        let current = Vec2::new(x, y) * friction;

        let mut movements = RotationDelta {
            x: current.x - self.movements_start.x,
            y: current.y - self.movements_start.y,
        };
        normalize_movements(&mut movements, ctx.config.movement_scale);

        // vertical drags are half as sensitive as horizontal ones
        movements.y *= friction / 2.0;
        movements.x *= friction;

        // drag-x turns into yaw, drag-y into pitch
        std::mem::swap(&mut movements.x, &mut movements.y);

        self.movements = movements;
        self.rotate(movements, ctx);
        self.movements_start = current;
    }
}

impl Controller for PointerController {
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
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y, ctx),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y, ctx),
            InputEvent::PointerUp | InputEvent::PointerLeave => self.on_pointer_up(ctx),
            _ => {}
        }
    }

    fn advance(&mut self, now: Duration) {
        let Some(id) = self.decay.poll(now) else {
            return;
        };
        if !self.decay.is_current(id) || self.is_mousedown {
            log::trace!("dropping stale pointer decay");
            return;
        }
        self.state.force_update = false;
        self.movements_start = Vec2::ZERO;
    }

    fn update(&mut self, ctx: &mut ControlContext<'_>) {
        if !self.is_mousedown {
            return;
        }
        super::update_base(&self.state, ctx);
    }

    fn reset(&mut self) {
        self.decay.cancel();
        self.state.force_update = false;
        self.is_mousedown = false;
        self.movements_start = Vec2::ZERO;
        self.movements = RotationDelta::default();
    }
}
