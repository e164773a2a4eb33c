// controls/movement.rs — hover-look: the view follows the pointer without a press

use super::{normalize_movements, ControlContext, Controller, ControllerState, RotationDelta};
use crate::input::{EventKind, InputEvent};
use glam::Vec2;

const BOUND_EVENTS: [EventKind; 2] = [EventKind::PointerMove, EventKind::PointerLeave];

/// Rotates by the distance between successive pointer positions. The first
/// sample after a leave only records a position, so re-entering the window
/// never jumps the view.
#[derive(Debug)]
pub struct MovementController {
    state: ControllerState,
    /// Friction-scaled position of the previous sample.
    last: Option<Vec2>,
    movements: RotationDelta,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: ControllerState::enabled(),
            last: None,
            movements: RotationDelta::default(),
        };
        for kind in BOUND_EVENTS {
            controller.bind(kind);
        }
        controller
    }

    pub fn movements(&self) -> RotationDelta {
        self.movements
    }

    fn on_pointer_move(&mut self, x: f32, y: f32, ctx: &mut ControlContext<'_>) {
        if !self.state.is_enabled {
            self.last = None;
            return;
        }
        let friction = ctx.config.mouse_friction();
        let current = Vec2::new(x, y) * friction;
        let Some(last) = self.last.replace(current) else {
            return;
        };

        let mut movements = RotationDelta {
            x: current.x - last.x,
            y: current.y - last.y,
        };
        normalize_movements(&mut movements, ctx.config.movement_scale);
        movements.y *= friction / 2.0;
        movements.x *= friction;
        std::mem::swap(&mut movements.x, &mut movements.y);

        self.movements = movements;
        self.rotate(movements, ctx);
    }
}

impl Controller for MovementController {
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
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y, ctx),
            InputEvent::PointerLeave => self.last = None,
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.state.force_update = false;
        self.last = None;
        self.movements = RotationDelta::default();
    }
}
