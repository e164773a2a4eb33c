// input.rs — platform-neutral input events and per-controller event bindings

/// Raw input delivered by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed at screen coordinates.
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    /// Pointer left the tracking surface.
    PointerLeave,
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    DeviceOrientation(DeviceOrientationEvent),
}

/// Sensor angles in degrees. Platforms may omit any of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceOrientationEvent {
    pub alpha: Option<f32>,
    pub beta: Option<f32>,
    pub gamma: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    DeviceOrientation,
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp => EventKind::PointerUp,
            Self::PointerLeave => EventKind::PointerLeave,
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchMove { .. } => EventKind::TouchMove,
            Self::TouchEnd => EventKind::TouchEnd,
            Self::DeviceOrientation(_) => EventKind::DeviceOrientation,
        }
    }
}

/// Event kinds a controller currently listens to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBindings {
    bound: Vec<EventKind>,
}

impl EventBindings {
    pub fn bind(&mut self, kind: EventKind) {
        if !self.bound.contains(&kind) {
            self.bound.push(kind);
        }
    }

    pub fn unbind(&mut self, kind: EventKind) {
        self.bound.retain(|k| *k != kind);
    }

    pub fn unbind_all(&mut self) {
        self.bound.clear();
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.bound.contains(&kind)
    }
}

/// Translate a winit window event into an [`InputEvent`].
///
/// `cursor` is the last known cursor position; winit reports button
/// presses without coordinates.
pub fn from_window_event(
    event: &winit::event::WindowEvent<'_>,
    cursor: (f32, f32),
) -> Option<InputEvent> {
    use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

    match event {
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => Some(match state {
            ElementState::Pressed => InputEvent::PointerDown {
                x: cursor.0,
                y: cursor.1,
            },
            ElementState::Released => InputEvent::PointerUp,
        }),
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMove {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeave),
        WindowEvent::Touch(touch) => {
            let (x, y) = (touch.location.x as f32, touch.location.y as f32);
            Some(match touch.phase {
                TouchPhase::Started => InputEvent::TouchStart { x, y },
                TouchPhase::Moved => InputEvent::TouchMove { x, y },
                TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::TouchEnd,
            })
        }
        _ => None,
    }
}
